//! The fixed law library. Order here fixes search order:
//! FOLD–MAP fusion before MAP fusion, forward direction before backward.

mod fold_map_fusion;
mod map_fusion;

use crate::law::RewriteRule;

/// Returns the law library in search order. New laws are added by
/// extending this list; the engine treats every entry uniformly.
pub fn all() -> Vec<RewriteRule> {
    vec![
        fold_map_fusion::forward(),
        fold_map_fusion::backward(),
        map_fusion::forward(),
        map_fusion::backward(),
    ]
}
