//! Error catalogs for known on-chain program families.
//!
//! Each family is a closed table of numeric error codes with a stable name
//! and a human-readable message. The tables are the data that `progerr`
//! registries are built from; nothing here performs resolution.
//!
//! # Families
//!
//! | Family        | Range      | Source                                    |
//! |---------------|------------|-------------------------------------------|
//! | `AnchorError` | 100-5000   | Anchor framework language errors          |
//! | `TokenError`  | 0-19       | SPL Token program errors                  |
//!
//! # Anchor Code Ranges
//!
//! | Range      | Category      |
//! |------------|---------------|
//! | 100-999    | Instructions  |
//! | 1000-1999  | IDL           |
//! | 2000-2499  | Constraints   |
//! | 2500-2999  | Require       |
//! | 3000-3999  | Accounts      |
//! | 4000-4099  | State         |
//! | 4100-4999  | Miscellaneous |
//! | 5000       | Deprecated    |
//!
//! # Example
//!
//! ```rust
//! use progerr_catalog::AnchorErrorCode;
//!
//! let entry = AnchorErrorCode::ConstraintMut.entry();
//! println!("{} ({}): {}", entry.name, entry.code, entry.message);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family label for Anchor framework errors.
pub const ANCHOR_FAMILY: &str = "AnchorError";

/// Family label for SPL Token program errors.
pub const TOKEN_FAMILY: &str = "TokenError";

/// Anchor framework language error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnchorErrorCode {
    // =========================================================================
    // Instructions (100-999)
    // =========================================================================
    /// 8 byte instruction identifier not provided
    InstructionMissing,
    /// Fallback functions are not supported
    InstructionFallbackNotFound,
    /// The program could not deserialize the given instruction
    InstructionDidNotDeserialize,
    /// The program could not serialize the given instruction
    InstructionDidNotSerialize,

    // =========================================================================
    // IDL Instructions (1000-1999)
    // =========================================================================
    /// Program compiled without IDL instructions
    IdlInstructionStub,
    /// Invalid program given to the IDL instruction
    IdlInstructionInvalidProgram,

    // =========================================================================
    // Constraints (2000-2499)
    // =========================================================================
    /// A mut constraint was violated
    ConstraintMut,
    /// A has_one constraint was violated
    ConstraintHasOne,
    /// A signer constraint was violated
    ConstraintSigner,
    /// A raw constraint was violated
    ConstraintRaw,
    /// An owner constraint was violated
    ConstraintOwner,
    /// A rent exemption constraint was violated
    ConstraintRentExempt,
    /// A seeds constraint was violated
    ConstraintSeeds,
    /// An executable constraint was violated
    ConstraintExecutable,
    /// A state constraint was violated
    ConstraintState,
    /// An associated constraint was violated
    ConstraintAssociated,
    /// An associated init constraint was violated
    ConstraintAssociatedInit,
    /// A close constraint was violated
    ConstraintClose,
    /// An address constraint was violated
    ConstraintAddress,
    /// Expected zero account discriminant
    ConstraintZero,
    /// A token mint constraint was violated
    ConstraintTokenMint,
    /// A token owner constraint was violated
    ConstraintTokenOwner,
    /// A mint mint authority constraint was violated
    ConstraintMintMintAuthority,
    /// A mint freeze authority constraint was violated
    ConstraintMintFreezeAuthority,
    /// A mint decimals constraint was violated
    ConstraintMintDecimals,
    /// A space constraint was violated
    ConstraintSpace,

    // =========================================================================
    // Require (2500-2999)
    // =========================================================================
    /// A require expression was violated
    RequireViolated,
    /// A require_eq expression was violated
    RequireEqViolated,
    /// A require_keys_eq expression was violated
    RequireKeysEqViolated,
    /// A require_neq expression was violated
    RequireNeqViolated,
    /// A require_keys_neq expression was violated
    RequireKeysNeqViolated,
    /// A require_gt expression was violated
    RequireGtViolated,
    /// A require_gte expression was violated
    RequireGteViolated,

    // =========================================================================
    // Accounts (3000-3999)
    // =========================================================================
    /// Discriminator already set on the account
    AccountDiscriminatorAlreadySet,
    /// No discriminator found on the account
    AccountDiscriminatorNotFound,
    /// Discriminator did not match
    AccountDiscriminatorMismatch,
    /// Account failed to deserialize
    AccountDidNotDeserialize,
    /// Account failed to serialize
    AccountDidNotSerialize,
    /// Not enough account keys for the instruction
    AccountNotEnoughKeys,
    /// Account is not mutable
    AccountNotMutable,
    /// Account owned by an unexpected program
    AccountOwnedByWrongProgram,
    /// Program ID mismatch
    InvalidProgramId,
    /// Program account is not executable
    InvalidProgramExecutable,
    /// Account did not sign
    AccountNotSigner,
    /// Account is not owned by the system program
    AccountNotSystemOwned,
    /// Account expected to be initialized
    AccountNotInitialized,
    /// Account is not a program data account
    AccountNotProgramData,
    /// Account is not the associated token account
    AccountNotAssociatedTokenAccount,
    /// Public key does not match the required sysvar
    AccountSysvarMismatch,
    /// Reallocation exceeds the permitted increase
    AccountReallocExceedsLimit,
    /// Account duplicated across reallocations
    AccountDuplicateReallocs,

    // =========================================================================
    // State (4000-4099)
    // =========================================================================
    /// State account has the wrong address
    StateInvalidAddress,

    // =========================================================================
    // Miscellaneous (4100-4999)
    // =========================================================================
    /// Declared program id does not match the actual program id
    DeclaredProgramIdMismatch,

    // =========================================================================
    // Deprecated (5000)
    // =========================================================================
    /// The API being used is deprecated
    Deprecated,
}

impl AnchorErrorCode {
    /// Returns the numeric error code as emitted in program logs.
    #[must_use]
    pub const fn code_number(&self) -> u32 {
        match self {
            // Instructions
            Self::InstructionMissing => 100,
            Self::InstructionFallbackNotFound => 101,
            Self::InstructionDidNotDeserialize => 102,
            Self::InstructionDidNotSerialize => 103,

            // IDL
            Self::IdlInstructionStub => 1000,
            Self::IdlInstructionInvalidProgram => 1001,

            // Constraints
            Self::ConstraintMut => 2000,
            Self::ConstraintHasOne => 2001,
            Self::ConstraintSigner => 2002,
            Self::ConstraintRaw => 2003,
            Self::ConstraintOwner => 2004,
            Self::ConstraintRentExempt => 2005,
            Self::ConstraintSeeds => 2006,
            Self::ConstraintExecutable => 2007,
            Self::ConstraintState => 2008,
            Self::ConstraintAssociated => 2009,
            Self::ConstraintAssociatedInit => 2010,
            Self::ConstraintClose => 2011,
            Self::ConstraintAddress => 2012,
            Self::ConstraintZero => 2013,
            Self::ConstraintTokenMint => 2014,
            Self::ConstraintTokenOwner => 2015,
            Self::ConstraintMintMintAuthority => 2016,
            Self::ConstraintMintFreezeAuthority => 2017,
            Self::ConstraintMintDecimals => 2018,
            Self::ConstraintSpace => 2019,

            // Require
            Self::RequireViolated => 2500,
            Self::RequireEqViolated => 2501,
            Self::RequireKeysEqViolated => 2502,
            Self::RequireNeqViolated => 2503,
            Self::RequireKeysNeqViolated => 2504,
            Self::RequireGtViolated => 2505,
            Self::RequireGteViolated => 2506,

            // Accounts
            Self::AccountDiscriminatorAlreadySet => 3000,
            Self::AccountDiscriminatorNotFound => 3001,
            Self::AccountDiscriminatorMismatch => 3002,
            Self::AccountDidNotDeserialize => 3003,
            Self::AccountDidNotSerialize => 3004,
            Self::AccountNotEnoughKeys => 3005,
            Self::AccountNotMutable => 3006,
            Self::AccountOwnedByWrongProgram => 3007,
            Self::InvalidProgramId => 3008,
            Self::InvalidProgramExecutable => 3009,
            Self::AccountNotSigner => 3010,
            Self::AccountNotSystemOwned => 3011,
            Self::AccountNotInitialized => 3012,
            Self::AccountNotProgramData => 3013,
            Self::AccountNotAssociatedTokenAccount => 3014,
            Self::AccountSysvarMismatch => 3015,
            Self::AccountReallocExceedsLimit => 3016,
            Self::AccountDuplicateReallocs => 3017,

            // State
            Self::StateInvalidAddress => 4000,

            // Miscellaneous
            Self::DeclaredProgramIdMismatch => 4100,

            // Deprecated
            Self::Deprecated => 5000,
        }
    }

    /// Returns the stable error name (the variant identifier).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InstructionMissing => "InstructionMissing",
            Self::InstructionFallbackNotFound => "InstructionFallbackNotFound",
            Self::InstructionDidNotDeserialize => "InstructionDidNotDeserialize",
            Self::InstructionDidNotSerialize => "InstructionDidNotSerialize",
            Self::IdlInstructionStub => "IdlInstructionStub",
            Self::IdlInstructionInvalidProgram => "IdlInstructionInvalidProgram",
            Self::ConstraintMut => "ConstraintMut",
            Self::ConstraintHasOne => "ConstraintHasOne",
            Self::ConstraintSigner => "ConstraintSigner",
            Self::ConstraintRaw => "ConstraintRaw",
            Self::ConstraintOwner => "ConstraintOwner",
            Self::ConstraintRentExempt => "ConstraintRentExempt",
            Self::ConstraintSeeds => "ConstraintSeeds",
            Self::ConstraintExecutable => "ConstraintExecutable",
            Self::ConstraintState => "ConstraintState",
            Self::ConstraintAssociated => "ConstraintAssociated",
            Self::ConstraintAssociatedInit => "ConstraintAssociatedInit",
            Self::ConstraintClose => "ConstraintClose",
            Self::ConstraintAddress => "ConstraintAddress",
            Self::ConstraintZero => "ConstraintZero",
            Self::ConstraintTokenMint => "ConstraintTokenMint",
            Self::ConstraintTokenOwner => "ConstraintTokenOwner",
            Self::ConstraintMintMintAuthority => "ConstraintMintMintAuthority",
            Self::ConstraintMintFreezeAuthority => "ConstraintMintFreezeAuthority",
            Self::ConstraintMintDecimals => "ConstraintMintDecimals",
            Self::ConstraintSpace => "ConstraintSpace",
            Self::RequireViolated => "RequireViolated",
            Self::RequireEqViolated => "RequireEqViolated",
            Self::RequireKeysEqViolated => "RequireKeysEqViolated",
            Self::RequireNeqViolated => "RequireNeqViolated",
            Self::RequireKeysNeqViolated => "RequireKeysNeqViolated",
            Self::RequireGtViolated => "RequireGtViolated",
            Self::RequireGteViolated => "RequireGteViolated",
            Self::AccountDiscriminatorAlreadySet => "AccountDiscriminatorAlreadySet",
            Self::AccountDiscriminatorNotFound => "AccountDiscriminatorNotFound",
            Self::AccountDiscriminatorMismatch => "AccountDiscriminatorMismatch",
            Self::AccountDidNotDeserialize => "AccountDidNotDeserialize",
            Self::AccountDidNotSerialize => "AccountDidNotSerialize",
            Self::AccountNotEnoughKeys => "AccountNotEnoughKeys",
            Self::AccountNotMutable => "AccountNotMutable",
            Self::AccountOwnedByWrongProgram => "AccountOwnedByWrongProgram",
            Self::InvalidProgramId => "InvalidProgramId",
            Self::InvalidProgramExecutable => "InvalidProgramExecutable",
            Self::AccountNotSigner => "AccountNotSigner",
            Self::AccountNotSystemOwned => "AccountNotSystemOwned",
            Self::AccountNotInitialized => "AccountNotInitialized",
            Self::AccountNotProgramData => "AccountNotProgramData",
            Self::AccountNotAssociatedTokenAccount => "AccountNotAssociatedTokenAccount",
            Self::AccountSysvarMismatch => "AccountSysvarMismatch",
            Self::AccountReallocExceedsLimit => "AccountReallocExceedsLimit",
            Self::AccountDuplicateReallocs => "AccountDuplicateReallocs",
            Self::StateInvalidAddress => "StateInvalidAddress",
            Self::DeclaredProgramIdMismatch => "DeclaredProgramIdMismatch",
            Self::Deprecated => "Deprecated",
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            // Instructions
            Self::InstructionMissing => "8 byte instruction identifier not provided",
            Self::InstructionFallbackNotFound => "Fallback functions are not supported",
            Self::InstructionDidNotDeserialize => {
                "The program could not deserialize the given instruction"
            }
            Self::InstructionDidNotSerialize => {
                "The program could not serialize the given instruction"
            }

            // IDL
            Self::IdlInstructionStub => "The program was compiled without idl instructions",
            Self::IdlInstructionInvalidProgram => {
                "The transaction was given an invalid program for the IDL instruction"
            }

            // Constraints
            Self::ConstraintMut => "A mut constraint was violated",
            Self::ConstraintHasOne => "A has_one constraint was violated",
            Self::ConstraintSigner => "A signer constraint was violated",
            Self::ConstraintRaw => "A raw constraint was violated",
            Self::ConstraintOwner => "An owner constraint was violated",
            Self::ConstraintRentExempt => "A rent exemption constraint was violated",
            Self::ConstraintSeeds => "A seeds constraint was violated",
            Self::ConstraintExecutable => "An executable constraint was violated",
            Self::ConstraintState => "A state constraint was violated",
            Self::ConstraintAssociated => "An associated constraint was violated",
            Self::ConstraintAssociatedInit => "An associated init constraint was violated",
            Self::ConstraintClose => "A close constraint was violated",
            Self::ConstraintAddress => "An address constraint was violated",
            Self::ConstraintZero => "Expected zero account discriminant",
            Self::ConstraintTokenMint => "A token mint constraint was violated",
            Self::ConstraintTokenOwner => "A token owner constraint was violated",
            Self::ConstraintMintMintAuthority => "A mint mint authority constraint was violated",
            Self::ConstraintMintFreezeAuthority => {
                "A mint freeze authority constraint was violated"
            }
            Self::ConstraintMintDecimals => "A mint decimals constraint was violated",
            Self::ConstraintSpace => "A space constraint was violated",

            // Require
            Self::RequireViolated => "A require expression was violated",
            Self::RequireEqViolated => "A require_eq expression was violated",
            Self::RequireKeysEqViolated => "A require_keys_eq expression was violated",
            Self::RequireNeqViolated => "A require_neq expression was violated",
            Self::RequireKeysNeqViolated => "A require_keys_neq expression was violated",
            Self::RequireGtViolated => "A require_gt expression was violated",
            Self::RequireGteViolated => "A require_gte expression was violated",

            // Accounts
            Self::AccountDiscriminatorAlreadySet => {
                "The account discriminator was already set on this account"
            }
            Self::AccountDiscriminatorNotFound => "No 8 byte discriminator was found on the account",
            Self::AccountDiscriminatorMismatch => {
                "8 byte discriminator did not match what was expected"
            }
            Self::AccountDidNotDeserialize => "Failed to deserialize the account",
            Self::AccountDidNotSerialize => "Failed to serialize the account",
            Self::AccountNotEnoughKeys => "Not enough account keys given to the instruction",
            Self::AccountNotMutable => "The given account is not mutable",
            Self::AccountOwnedByWrongProgram => {
                "The given account is owned by a different program than expected"
            }
            Self::InvalidProgramId => "Program ID was not as expected",
            Self::InvalidProgramExecutable => "Program account is not executable",
            Self::AccountNotSigner => "The given account did not sign",
            Self::AccountNotSystemOwned => "The given account is not owned by the system program",
            Self::AccountNotInitialized => {
                "The program expected this account to be already initialized"
            }
            Self::AccountNotProgramData => "The given account is not a program data account",
            Self::AccountNotAssociatedTokenAccount => {
                "The given account is not the associated token account"
            }
            Self::AccountSysvarMismatch => "The given public key does not match the required sysvar",
            Self::AccountReallocExceedsLimit => {
                "The account reallocation exceeds the MAX_PERMITTED_DATA_INCREASE limit"
            }
            Self::AccountDuplicateReallocs => {
                "The account was duplicated for more than one reallocation"
            }

            // State
            Self::StateInvalidAddress => {
                "The given state account does not have the correct address"
            }

            // Miscellaneous
            Self::DeclaredProgramIdMismatch => {
                "The declared program id does not match the actual program id"
            }

            // Deprecated
            Self::Deprecated => "The API being used is deprecated and should no longer be used",
        }
    }

    /// Returns the full catalog entry.
    #[must_use]
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            code: self.code_number(),
            name: self.name().to_string(),
            message: self.message().to_string(),
        }
    }

    /// Looks up the variant carrying `code`.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code_number() == code)
    }

    /// Returns all Anchor error codes.
    #[must_use]
    pub const fn all() -> &'static [AnchorErrorCode] {
        &[
            // Instructions
            Self::InstructionMissing,
            Self::InstructionFallbackNotFound,
            Self::InstructionDidNotDeserialize,
            Self::InstructionDidNotSerialize,
            // IDL
            Self::IdlInstructionStub,
            Self::IdlInstructionInvalidProgram,
            // Constraints
            Self::ConstraintMut,
            Self::ConstraintHasOne,
            Self::ConstraintSigner,
            Self::ConstraintRaw,
            Self::ConstraintOwner,
            Self::ConstraintRentExempt,
            Self::ConstraintSeeds,
            Self::ConstraintExecutable,
            Self::ConstraintState,
            Self::ConstraintAssociated,
            Self::ConstraintAssociatedInit,
            Self::ConstraintClose,
            Self::ConstraintAddress,
            Self::ConstraintZero,
            Self::ConstraintTokenMint,
            Self::ConstraintTokenOwner,
            Self::ConstraintMintMintAuthority,
            Self::ConstraintMintFreezeAuthority,
            Self::ConstraintMintDecimals,
            Self::ConstraintSpace,
            // Require
            Self::RequireViolated,
            Self::RequireEqViolated,
            Self::RequireKeysEqViolated,
            Self::RequireNeqViolated,
            Self::RequireKeysNeqViolated,
            Self::RequireGtViolated,
            Self::RequireGteViolated,
            // Accounts
            Self::AccountDiscriminatorAlreadySet,
            Self::AccountDiscriminatorNotFound,
            Self::AccountDiscriminatorMismatch,
            Self::AccountDidNotDeserialize,
            Self::AccountDidNotSerialize,
            Self::AccountNotEnoughKeys,
            Self::AccountNotMutable,
            Self::AccountOwnedByWrongProgram,
            Self::InvalidProgramId,
            Self::InvalidProgramExecutable,
            Self::AccountNotSigner,
            Self::AccountNotSystemOwned,
            Self::AccountNotInitialized,
            Self::AccountNotProgramData,
            Self::AccountNotAssociatedTokenAccount,
            Self::AccountSysvarMismatch,
            Self::AccountReallocExceedsLimit,
            Self::AccountDuplicateReallocs,
            // State
            Self::StateInvalidAddress,
            // Miscellaneous
            Self::DeclaredProgramIdMismatch,
            // Deprecated
            Self::Deprecated,
        ]
    }
}

impl fmt::Display for AnchorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code_number(), self.message())
    }
}

/// SPL Token program error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TokenErrorCode {
    /// Lamport balance below rent-exempt threshold
    NotRentExempt,
    /// Insufficient funds for the operation
    InsufficientFunds,
    /// Invalid mint
    InvalidMint,
    /// Account not associated with this mint
    MintMismatch,
    /// Owner does not match
    OwnerMismatch,
    /// Mint has a fixed supply
    FixedSupply,
    /// Account or mint already in use
    AlreadyInUse,
    /// Invalid number of provided signers
    InvalidNumberOfProvidedSigners,
    /// Invalid number of required signers
    InvalidNumberOfRequiredSigners,
    /// State is uninitialized
    UninitializedState,
    /// Instruction does not support native tokens
    NativeNotSupported,
    /// Non-native account closed with a balance
    NonNativeHasBalance,
    /// Invalid instruction
    InvalidInstruction,
    /// State is invalid for the requested operation
    InvalidState,
    /// Operation overflowed
    Overflow,
    /// Authority type not supported by the account
    AuthorityTypeNotSupported,
    /// Mint cannot freeze accounts
    MintCannotFreeze,
    /// Account is frozen
    AccountFrozen,
    /// Decimals do not match the mint
    MintDecimalsMismatch,
    /// Instruction does not support non-native tokens
    NonNativeNotSupported,
}

impl TokenErrorCode {
    /// Returns the numeric error code as emitted in program logs.
    #[must_use]
    pub const fn code_number(&self) -> u32 {
        match self {
            Self::NotRentExempt => 0,
            Self::InsufficientFunds => 1,
            Self::InvalidMint => 2,
            Self::MintMismatch => 3,
            Self::OwnerMismatch => 4,
            Self::FixedSupply => 5,
            Self::AlreadyInUse => 6,
            Self::InvalidNumberOfProvidedSigners => 7,
            Self::InvalidNumberOfRequiredSigners => 8,
            Self::UninitializedState => 9,
            Self::NativeNotSupported => 10,
            Self::NonNativeHasBalance => 11,
            Self::InvalidInstruction => 12,
            Self::InvalidState => 13,
            Self::Overflow => 14,
            Self::AuthorityTypeNotSupported => 15,
            Self::MintCannotFreeze => 16,
            Self::AccountFrozen => 17,
            Self::MintDecimalsMismatch => 18,
            Self::NonNativeNotSupported => 19,
        }
    }

    /// Returns the stable error name (the variant identifier).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NotRentExempt => "NotRentExempt",
            Self::InsufficientFunds => "InsufficientFunds",
            Self::InvalidMint => "InvalidMint",
            Self::MintMismatch => "MintMismatch",
            Self::OwnerMismatch => "OwnerMismatch",
            Self::FixedSupply => "FixedSupply",
            Self::AlreadyInUse => "AlreadyInUse",
            Self::InvalidNumberOfProvidedSigners => "InvalidNumberOfProvidedSigners",
            Self::InvalidNumberOfRequiredSigners => "InvalidNumberOfRequiredSigners",
            Self::UninitializedState => "UninitializedState",
            Self::NativeNotSupported => "NativeNotSupported",
            Self::NonNativeHasBalance => "NonNativeHasBalance",
            Self::InvalidInstruction => "InvalidInstruction",
            Self::InvalidState => "InvalidState",
            Self::Overflow => "Overflow",
            Self::AuthorityTypeNotSupported => "AuthorityTypeNotSupported",
            Self::MintCannotFreeze => "MintCannotFreeze",
            Self::AccountFrozen => "AccountFrozen",
            Self::MintDecimalsMismatch => "MintDecimalsMismatch",
            Self::NonNativeNotSupported => "NonNativeNotSupported",
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotRentExempt => "Lamport balance below rent-exempt threshold",
            Self::InsufficientFunds => "Insufficient funds",
            Self::InvalidMint => "Invalid Mint",
            Self::MintMismatch => "Account not associated with this Mint",
            Self::OwnerMismatch => "Owner does not match",
            Self::FixedSupply => "Fixed supply",
            Self::AlreadyInUse => "Already in use",
            Self::InvalidNumberOfProvidedSigners => "Invalid number of provided signers",
            Self::InvalidNumberOfRequiredSigners => "Invalid number of required signers",
            Self::UninitializedState => "State is uninitialized",
            Self::NativeNotSupported => "Instruction does not support native tokens",
            Self::NonNativeHasBalance => {
                "Non-native account can only be closed if its balance is zero"
            }
            Self::InvalidInstruction => "Invalid instruction",
            Self::InvalidState => "State is invalid for requested operation",
            Self::Overflow => "Operation overflowed",
            Self::AuthorityTypeNotSupported => "Account does not support specified authority type",
            Self::MintCannotFreeze => "This token mint cannot freeze accounts",
            Self::AccountFrozen => "Account is frozen",
            Self::MintDecimalsMismatch => {
                "The provided decimals value different from the Mint decimals"
            }
            Self::NonNativeNotSupported => "Instruction does not support non-native tokens",
        }
    }

    /// Returns the full catalog entry.
    #[must_use]
    pub fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            code: self.code_number(),
            name: self.name().to_string(),
            message: self.message().to_string(),
        }
    }

    /// Looks up the variant carrying `code`.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code_number() == code)
    }

    /// Returns all SPL Token error codes.
    #[must_use]
    pub const fn all() -> &'static [TokenErrorCode] {
        &[
            Self::NotRentExempt,
            Self::InsufficientFunds,
            Self::InvalidMint,
            Self::MintMismatch,
            Self::OwnerMismatch,
            Self::FixedSupply,
            Self::AlreadyInUse,
            Self::InvalidNumberOfProvidedSigners,
            Self::InvalidNumberOfRequiredSigners,
            Self::UninitializedState,
            Self::NativeNotSupported,
            Self::NonNativeHasBalance,
            Self::InvalidInstruction,
            Self::InvalidState,
            Self::Overflow,
            Self::AuthorityTypeNotSupported,
            Self::MintCannotFreeze,
            Self::AccountFrozen,
            Self::MintDecimalsMismatch,
            Self::NonNativeNotSupported,
        ]
    }
}

impl fmt::Display for TokenErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code_number(), self.message())
    }
}

/// One row of a family table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Numeric code as emitted by the program
    pub code: u32,
    /// Stable error name
    pub name: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.code, self.message)
    }
}
