//! # Token Minter
//!
//! An on-chain program that creates token mints controlled by a single
//! program-derived authority, and manages the accounts of those mints.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Create a mint and issue its initial supply in one instruction
//! - Freeze and thaw token accounts (derived authority only)
//! - Burn tokens from your own account
//!
//! The derived authority is both mint authority and freeze authority of
//! every mint created here. It has no private key: it authorizes by the
//! caller naming its address and canonical bump, which the program
//! re-derives and compares.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 74 bytes | Defines a token type |
//! | Account | 73 bytes | Holds one owner's tokens of one mint |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | CreateToken | Create a mint and issue initial supply |
//! | 1 | FreezeAccount | Freeze an account |
//! | 2 | ThawAccount | Thaw a frozen account |
//! | 3 | BurnTokens | Burn tokens from the owner's account |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Seeds and limits
pub mod constants;

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Mint, Account)
pub mod state;

/// Validation, authority derivation and the unit of work
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{ErrorKind, MinterError};
pub use instruction::MinterInstruction;
pub use processor::Processor;
pub use state::{Account, AccountState, Mint, Pack};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("BvzJLu6m2ChXPtFdgrB6aTLvhMQVyDcscMJtmd9PamTo");
