mod aggregate;
mod clock;
mod expense;
mod insight;
mod ledger;
mod money;
mod sales;
mod validation;

pub use aggregate::*;
pub use clock::*;
pub use expense::*;
pub use insight::*;
pub use ledger::*;
pub use money::*;
pub use sales::*;
pub use validation::*;
