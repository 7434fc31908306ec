//! Registry for all council plugins and their ports.

use std::sync::Arc;

use crate::model::{Coordinate, CouncilId, ServiceArea};
use crate::ports::{AddressPort, LookupError, SchedulePort};

/// Collection of ports implementing a provider for a single council.
pub struct CouncilPlugin {
    /// Static service-area data for the council.
    pub area: ServiceArea,
    /// Implementation for matching addresses.
    pub address_port: Arc<dyn AddressPort>,
    /// Implementation for fetching schedules.
    pub schedule_port: Arc<dyn SchedulePort>,
}

/// Registry that resolves plugins by council identifier or by coordinate.
///
/// Plugins are kept in registration order so that geofence resolution is
/// deterministic: when two service areas share an edge, the first registered
/// plugin wins.
pub struct CouncilRegistry {
    plugins: Vec<CouncilPlugin>,
}

impl CouncilRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<CouncilPlugin>) -> Self {
        Self { plugins }
    }

    /// Return service areas for all registered councils.
    #[must_use]
    pub fn areas(&self) -> Vec<ServiceArea> {
        self.plugins
            .iter()
            .map(|plugin| plugin.area.clone())
            .collect()
    }

    /// Iterator over the registered plugins, in registration order.
    pub fn plugins_iter(&self) -> impl Iterator<Item = &CouncilPlugin> {
        self.plugins.iter()
    }

    /// Look up a plugin for the given council.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownCouncil`] when no plugin is registered.
    pub fn plugin(&self, council: &CouncilId) -> Result<&CouncilPlugin, LookupError> {
        self.plugins
            .iter()
            .find(|plugin| plugin.area.meta.id == *council)
            .ok_or(LookupError::UnknownCouncil)
    }

    /// Geofence resolution: the first plugin whose bounding box contains the
    /// point. Edges are inclusive; `None` means the coordinate falls outside
    /// every registered service area.
    #[must_use]
    pub fn locate(&self, point: Coordinate) -> Option<&CouncilPlugin> {
        self.plugins
            .iter()
            .find(|plugin| plugin.area.bounds.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Weekday;

    use super::{CouncilPlugin, CouncilRegistry};
    use crate::model::{
        Address, BoundingBox, Cadence, CollectionRule, ContactInfo, Coordinate, CouncilId,
        CouncilMeta, Schedule, ServiceArea,
    };
    use crate::ports::{AddressPort, AddressQuery, LookupError, SchedulePort};

    struct StubPort {
        meta: CouncilMeta,
    }

    #[async_trait]
    impl AddressPort for StubPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn search(
            &self,
            _query: &AddressQuery,
            _limit: usize,
        ) -> Result<Vec<Address>, LookupError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl SchedulePort for StubPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn schedule(&self) -> Result<Schedule, LookupError> {
            let rule = CollectionRule {
                day: Weekday::Tue,
                cadence: Cadence::Weekly,
            };
            Ok(Schedule {
                general: rule,
                recycling: rule,
                green: rule,
            })
        }
    }

    fn plugin(slug: &str, north: f64, south: f64) -> CouncilPlugin {
        let meta = CouncilMeta {
            id: CouncilId(slug.to_owned()),
            name: format!("{slug} council"),
            contact: ContactInfo {
                phone: String::from("(03) 0000 0000"),
                email: format!("info@{slug}.example"),
            },
        };
        let area = ServiceArea {
            meta: meta.clone(),
            bounds: BoundingBox {
                north,
                south,
                east: 145.15,
                west: 145.1,
            },
            color: String::from("#22c55e"),
        };
        let port = Arc::new(StubPort { meta });
        CouncilPlugin {
            area,
            address_port: Arc::clone(&port) as Arc<dyn AddressPort>,
            schedule_port: port,
        }
    }

    fn registry() -> CouncilRegistry {
        CouncilRegistry::new(vec![
            plugin("north", -37.75, -37.8),
            plugin("south", -37.8, -37.85),
        ])
    }

    #[test]
    fn locate_finds_the_containing_area() {
        let registry = registry();
        let point = Coordinate {
            lat: -37.82,
            lng: 145.13,
        };
        let found = registry.locate(point).expect("point lies in south area");
        assert_eq!(found.area.meta.id, CouncilId(String::from("south")));
    }

    #[test]
    fn locate_prefers_the_first_registered_area_on_shared_edges() {
        // lat -37.8 is both the south edge of "north" and the north edge of
        // "south"; registration order decides.
        let registry = registry();
        let point = Coordinate {
            lat: -37.8,
            lng: 145.13,
        };
        let found = registry.locate(point).expect("edge point lies in both");
        assert_eq!(found.area.meta.id, CouncilId(String::from("north")));
    }

    #[test]
    fn locate_returns_none_outside_every_area() {
        let registry = registry();
        let point = Coordinate {
            lat: -37.9,
            lng: 145.13,
        };
        assert!(
            registry.locate(point).is_none(),
            "point south of both areas must not resolve"
        );
    }

    #[test]
    fn plugin_lookup_rejects_unknown_councils() {
        let registry = registry();
        let missing = CouncilId(String::from("nowhere"));
        assert!(
            matches!(
                registry.plugin(&missing),
                Err(LookupError::UnknownCouncil)
            ),
            "unregistered council id must be rejected"
        );
    }
}
