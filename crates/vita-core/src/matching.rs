//! Nearby-user discovery by linear scan over the candidate users.

use std::collections::HashSet;

use crate::domain::{Connection, EntityId, User};
use crate::geo::within_radius;

/// Target ids of every outbound edge held by `user_id`, whatever its status.
pub fn connected_targets<'a>(
    user_id: EntityId,
    connections: impl IntoIterator<Item = &'a Connection>,
) -> HashSet<EntityId> {
    connections
        .into_iter()
        .filter(|c| c.user_id == user_id)
        .map(|c| c.target_user_id)
        .collect()
}

/// Users within `max_distance_km` of `requester`, in candidate order.
///
/// Skips the requester, anyone already in `excluded`, and users without
/// coordinates. A requester without coordinates gets an empty result.
pub fn nearby_users<'a>(
    requester: &User,
    candidates: impl IntoIterator<Item = &'a User>,
    excluded: &HashSet<EntityId>,
    max_distance_km: f64,
) -> Vec<User> {
    let Some(origin) = requester.coordinates() else {
        return Vec::new();
    };

    candidates
        .into_iter()
        .filter(|u| u.id != requester.id && !excluded.contains(&u.id))
        .filter(|u| {
            u.coordinates()
                .is_some_and(|c| within_radius(origin, c, max_distance_km).is_some())
        })
        .cloned()
        .collect()
}
