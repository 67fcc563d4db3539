pub mod models {
    pub mod config;
    pub mod errors;
    pub mod message;
    pub mod validator;
}

pub mod utils {
    pub mod accounts;
    pub mod helpers;
    pub mod instructions;
    pub mod transactions;
}
