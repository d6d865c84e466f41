//! Proximity-ranked traversal of the component registry.
//!
//! Containers reachable from the starting container are gathered with an
//! explicit work list and bucketed by proximity tier. Tiers are then visited
//! nearest first:
//!
//! ```text
//! Local -> App -> Plugin -> Global -> OutOfScope
//! ```
//!
//! Every registration of a tier is delivered before the visitor decides
//! whether to continue, so ties at the same proximity are never cut short by
//! an accepting callback.

use cartel_carton::{CompactString, FxHashSet, SmallVec};

use crate::model::{Component, ComponentId, ContainerId};
use crate::proximity::Proximity;
use crate::registry::ComponentIndex;

/// A registration delivered to a visitor callback.
#[derive(Debug, Clone, Copy)]
pub struct Visited<'a> {
    /// Name the component is registered under.
    pub name: &'a CompactString,
    pub component_id: ComponentId,
    pub component: &'a Component,
    pub proximity: Proximity,
    /// Registering container. `None` for unregistered components.
    pub container: Option<ContainerId>,
}

/// What a visitor callback wants after seeing a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitFlow {
    /// Not satisfied, keep searching.
    Continue,
    /// Satisfied. The rest of the current tier is still visited, farther
    /// tiers are not.
    Accept,
    /// Terminate immediately.
    Stop,
}

/// Result of a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitOutcome {
    /// Tier at which a callback first accepted.
    pub accepted_at: Option<Proximity>,
    /// A callback requested termination.
    pub stopped: bool,
}

/// Containers reachable from `start`, grouped by tier in discovery order.
fn collect_tiers<I>(index: &I, start: ContainerId) -> [SmallVec<[ContainerId; 4]>; 4]
where
    I: ComponentIndex + ?Sized,
{
    let mut tiers: [SmallVec<[ContainerId; 4]>; 4] = Default::default();
    let mut visited = FxHashSet::default();
    let mut work_list = std::collections::VecDeque::from([start]);

    while let Some(id) = work_list.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        let Some(container) = index.container(id) else {
            tracing::warn!("visit: dangling container reference {:?}", id);
            continue;
        };
        let tier = container.proximity();
        // Container kinds never map to OutOfScope.
        tiers[tier.index()].push(id);
        work_list.extend(container.parents.iter().copied());
    }

    tiers
}

/// Visit every component reachable from `start`, nearest tier first, up to
/// and including `furthest`.
///
/// A `start` of `None` still reaches the unregistered pool when `furthest`
/// is [`Proximity::OutOfScope`].
pub fn visit<'a, I, F>(
    index: &'a I,
    start: Option<ContainerId>,
    furthest: Proximity,
    mut callback: F,
) -> VisitOutcome
where
    I: ComponentIndex + ?Sized,
    F: FnMut(Visited<'a>) -> VisitFlow,
{
    let tiers = match start {
        Some(start) => collect_tiers(index, start),
        None => Default::default(),
    };
    let mut outcome = VisitOutcome::default();

    for proximity in Proximity::up_to(furthest) {
        let mut accepted = false;

        let mut deliver = |visited: Visited<'a>| match callback(visited) {
            VisitFlow::Continue => true,
            VisitFlow::Accept => {
                accepted = true;
                true
            }
            VisitFlow::Stop => false,
        };

        let completed = if proximity == Proximity::OutOfScope {
            index.unregistered().iter().all(|registration| {
                match index.component(registration.component) {
                    Some(component) => deliver(Visited {
                        name: &registration.name,
                        component_id: registration.component,
                        component,
                        proximity,
                        container: None,
                    }),
                    None => true,
                }
            })
        } else {
            tiers[proximity.index()].iter().all(|&container_id| {
                let Some(container) = index.container(container_id) else {
                    return true;
                };
                container.registrations.iter().all(|registration| {
                    match index.component(registration.component) {
                        Some(component) => deliver(Visited {
                            name: &registration.name,
                            component_id: registration.component,
                            component,
                            proximity,
                            container: Some(container_id),
                        }),
                        None => true,
                    }
                })
            })
        };

        if !completed {
            tracing::trace!("visit: stopped at {}", proximity);
            outcome.stopped = true;
            if accepted {
                outcome.accepted_at = Some(proximity);
            }
            return outcome;
        }
        if accepted {
            tracing::trace!("visit: accepted at {}", proximity);
            outcome.accepted_at = Some(proximity);
            return outcome;
        }
    }

    outcome
}
