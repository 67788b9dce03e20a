pub mod control;
pub mod equilibrium;
pub mod payoff;
pub mod production;

pub use control::*;
pub use equilibrium::*;
pub use payoff::*;
pub use production::*;
