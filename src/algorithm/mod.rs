/// Seedable random source for stochastic choices
pub mod selection;
/// Min-conflicts repair search
pub mod solver;
/// Placement classification and repair by fresh solve
pub mod validator;
