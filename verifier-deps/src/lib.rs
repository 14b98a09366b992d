//! Empty workspace member that pins `solana-program` to the exact version
//! expected by the verified-build toolchain.
