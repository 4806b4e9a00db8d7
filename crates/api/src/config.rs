//! Command-line configuration.
//!
//! One binary serves exactly one service per process; which one, and
//! where its collaborators live, comes from the command line.

use clap::{Parser, ValueEnum};

/// Which service this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    Cart,
    Inventory,
    Payment,
    Orchestrator,
}

impl ServiceKind {
    /// Returns the service name as reported by `/health`.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Cart => "cart",
            ServiceKind::Inventory => "inventory",
            ServiceKind::Payment => "payment",
            ServiceKind::Orchestrator => "orchestrator",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(
    name = "checkout",
    about = "Checkout microservices: cart, inventory, payment, orchestrator"
)]
pub struct Cli {
    /// Which service to serve from this process.
    #[arg(long, value_enum, default_value_t = ServiceKind::Orchestrator)]
    pub service: ServiceKind,

    /// Bind address.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port.
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Base URL of the inventory service (orchestrator only).
    #[arg(long, default_value = "http://127.0.0.1:5001")]
    pub inventory_url: String,

    /// Base URL of the payment service (orchestrator only).
    #[arg(long, default_value = "http://127.0.0.1:5002")]
    pub payment_url: String,
}

impl Cli {
    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
