pub mod auth;
pub mod cache;
pub mod supabase;

#[allow(unused_imports)]
pub use auth::SignUpOutcome;
#[allow(unused_imports)]
pub use supabase::{BackendConfig, CacheStatus, CachedPayload, SupabaseClient, SupabaseError};
