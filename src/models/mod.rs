// Models module - JSON payloads exchanged with the API

pub mod card;
pub mod deposit;
pub mod envelope;
pub mod float;
pub mod integrator;
pub mod transaction;
pub mod user;

pub use card::{Card, CreateCard};
pub use deposit::{BankAccount, CreateDeposit, Deposit, DepositInstructions, WalletAddress};
pub use envelope::{Acknowledgement, ApiResponse};
pub use float::FloatBalance;
pub use integrator::{IntegratorRegistration, RegisterIntegrator};
pub use transaction::Transaction;
pub use user::{AddressUpdate, CardUser, CreateUser, CreatedUser, DocumentUploadUrls, UpdateUserAddress};
