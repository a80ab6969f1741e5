// Services module - one method per API operation, implemented on `Client`

pub mod cards;
pub mod deposits;
pub mod floats;
pub mod integrator;
pub mod transactions;
pub mod users;
