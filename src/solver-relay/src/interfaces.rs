//! Solidity ABI interface scaffolding for the relay's collaborators.
//!
//! Note: the relay performs its external calls through `RawCall` with manual
//! selectors, but having these interfaces around makes the ABI expectations
//! explicit and enables typed cross-contract calls if desired.

use stylus_sdk::alloy_sol_types::sol;

sol! {
    /// The slice of the settlement contract the relay depends on.
    interface ISettlement {
        function authenticator() external view returns (address);
    }

    /// Authority oracle: is an address currently permitted to settle?
    interface ISolverAuthentication {
        function isSolver(address prospectiveSolver) external view returns (bool);
    }
}
