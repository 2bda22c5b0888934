// Leadboard Infrastructure - Credential Adapters
// Implements: PasswordHasher, TokenSigner

pub mod bcrypt_hasher;
pub mod jwt_signer;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt_signer::JwtTokenSigner;
