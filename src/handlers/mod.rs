// handlers/mod.rs - two tiers
//
// public:    no permission guard (health, fallbacks)
// protected: every method router is wrapped by `middleware::guarded` with the
//            permission string it requires
pub mod protected;
pub mod public;
