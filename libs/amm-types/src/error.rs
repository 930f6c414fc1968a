use soroban_sdk::contracterror;

/// Failure reasons surfaced by the exchange.
///
/// Every variant aborts the whole operation; reserves and claim supply are
/// left exactly as they were before the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmError {
    /// Quoting against an empty reserve
    DivisionByZero = 1,
    /// An intermediate or final amount does not fit its integer width
    ArithmeticOverflow = 2,
    /// Deposit offers fewer tokens than the current ratio requires
    InsufficientTokenAmount = 3,
    /// Burn of zero claims, or more claims than the holder owns
    InsufficientClaims = 4,
    /// Swap output below the caller's minimum
    SlippageExceeded = 5,
    /// A base-asset or token ledger call failed (balance, allowance, auth)
    LedgerTransferFailed = 6,
    AlreadyInitialized = 7,
    NotInitialized = 8,
    /// Bootstrapping deposit with exactly one zero side
    InvalidDeposit = 9,
    /// Claim ledger not administered by the exchange, or already in circulation
    InvalidClaimToken = 10,
}
