//! High-level service facade combining all providers.

use std::sync::Arc;

use crate::model::{
    Address, BinType, CollectionRule, Coordinate, CouncilId, Schedule, ServiceArea,
};
use crate::plugin::CouncilRegistry;
use crate::ports::{AddressQuery, LookupError};

#[derive(Debug, Clone)]
/// The council half of a successful lookup.
pub struct CouncilResolution {
    /// Service area the address falls inside.
    pub area: ServiceArea,
    /// That council's kerbside schedule.
    pub schedule: Schedule,
}

#[derive(Debug, Clone)]
/// Outcome of running the full lookup pipeline for one query.
pub struct Resolution {
    /// The matched address.
    pub address: Address,
    /// The resolved council, or `None` when the address sits outside every
    /// registered service area ("council undetermined").
    pub council: Option<CouncilResolution>,
}

/// Public entry point for matching addresses and looking up schedules.
pub struct BinsoutService {
    registry: Arc<CouncilRegistry>,
}

impl BinsoutService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<CouncilRegistry>) -> Self {
        Self { registry }
    }

    /// List all registered councils and their display names.
    #[must_use]
    pub fn councils(&self) -> Vec<(CouncilId, String)> {
        self.registry
            .areas()
            .into_iter()
            .map(|area| (area.meta.id, area.meta.name))
            .collect()
    }

    /// Service areas for every registered council, in registration order.
    /// The map view draws these directly.
    #[must_use]
    pub fn areas(&self) -> Vec<ServiceArea> {
        self.registry.areas()
    }

    /// Find addresses matching the query across every registered council.
    ///
    /// Councils are scanned in registration order and results concatenated
    /// until `limit` is reached.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if a provider backend fails.
    pub async fn search_addresses(
        &self,
        query: &AddressQuery,
        limit: usize,
    ) -> Result<Vec<Address>, LookupError> {
        let mut results = Vec::new();
        if limit == 0 || query.is_empty() {
            return Ok(results);
        }

        for plugin in self.registry.plugins_iter() {
            let remaining = limit.saturating_sub(results.len());
            if remaining == 0 {
                break;
            }
            let mut found = plugin.address_port.search(query, remaining).await?;
            results.append(&mut found);
        }

        Ok(results)
    }

    /// Geofence resolution: the service area containing the coordinate, or
    /// `None` when it falls outside every registered area.
    #[must_use]
    pub fn locate_council(&self, point: Coordinate) -> Option<ServiceArea> {
        self.registry.locate(point).map(|plugin| plugin.area.clone())
    }

    /// Load the kerbside schedule for a council.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the council is unknown or its provider
    /// fails.
    pub async fn schedule_for(&self, council: &CouncilId) -> Result<Schedule, LookupError> {
        let plugin = self.registry.plugin(council)?;
        plugin.schedule_port.schedule().await
    }

    /// Look up the collection rule for one bin type in one council.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the council is unknown or its provider
    /// fails.
    pub async fn collection_rule(
        &self,
        council: &CouncilId,
        bin: BinType,
    ) -> Result<CollectionRule, LookupError> {
        let schedule = self.schedule_for(council).await?;
        Ok(*schedule.rule(bin))
    }

    /// Run the full pipeline: match the query to an address, geofence the
    /// address to a council, and fetch that council's schedule.
    ///
    /// `Ok(None)` means no address matched; a resolution with `council: None`
    /// means the address lies outside every registered service area.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if a provider backend fails.
    pub async fn resolve(&self, query: &AddressQuery) -> Result<Option<Resolution>, LookupError> {
        let Some(address) = self.search_addresses(query, 1).await?.into_iter().next() else {
            return Ok(None);
        };

        let Some(plugin) = self.registry.locate(address.coordinate) else {
            return Ok(Some(Resolution {
                address,
                council: None,
            }));
        };

        let schedule = plugin.schedule_port.schedule().await?;

        Ok(Some(Resolution {
            address,
            council: Some(CouncilResolution {
                area: plugin.area.clone(),
                schedule,
            }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Weekday;

    use super::BinsoutService;
    use crate::model::{
        Address, BinType, BoundingBox, Cadence, CollectionRule, ContactInfo, Coordinate,
        CouncilId, CouncilMeta, Schedule, ServiceArea, WeekParity,
    };
    use crate::plugin::{CouncilPlugin, CouncilRegistry};
    use crate::ports::{AddressPort, AddressQuery, LookupError, SchedulePort};

    struct StaticPort {
        meta: CouncilMeta,
        addresses: Vec<Address>,
        schedule: Schedule,
    }

    #[async_trait]
    impl AddressPort for StaticPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn search(
            &self,
            query: &AddressQuery,
            limit: usize,
        ) -> Result<Vec<Address>, LookupError> {
            Ok(self
                .addresses
                .iter()
                .filter(|address| address.matches(&query.text))
                .take(limit)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl SchedulePort for StaticPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn schedule(&self) -> Result<Schedule, LookupError> {
            Ok(self.schedule.clone())
        }
    }

    fn manningham_schedule() -> Schedule {
        Schedule {
            general: CollectionRule {
                day: Weekday::Tue,
                cadence: Cadence::Weekly,
            },
            recycling: CollectionRule {
                day: Weekday::Tue,
                cadence: Cadence::Fortnightly(WeekParity::A),
            },
            green: CollectionRule {
                day: Weekday::Fri,
                cadence: Cadence::Fortnightly(WeekParity::B),
            },
        }
    }

    fn service() -> BinsoutService {
        let meta = CouncilMeta {
            id: CouncilId(String::from("manningham")),
            name: String::from("Manningham City Council"),
            contact: ContactInfo {
                phone: String::from("(03) 9840 9333"),
                email: String::from("info@manningham.vic.gov.au"),
            },
        };
        let area = ServiceArea {
            meta: meta.clone(),
            bounds: BoundingBox {
                north: -37.75,
                south: -37.8,
                east: 145.15,
                west: 145.1,
            },
            color: String::from("#22c55e"),
        };
        let addresses = vec![
            Address {
                label: String::from("123 Main Street, Doncaster VIC 3108"),
                suburb: String::from("doncaster"),
                coordinate: Coordinate {
                    lat: -37.77,
                    lng: 145.13,
                },
            },
            Address {
                label: String::from("456 High Street, Donvale VIC 3111"),
                suburb: String::from("donvale"),
                coordinate: Coordinate {
                    lat: -37.78,
                    lng: 145.14,
                },
            },
            // Matched by label but geocoded outside every service area.
            Address {
                label: String::from("1 Remote Road, Warrandyte VIC 3113"),
                suburb: String::from("warrandyte"),
                coordinate: Coordinate {
                    lat: -37.05,
                    lng: 145.22,
                },
            },
        ];
        let port = Arc::new(StaticPort {
            meta,
            addresses,
            schedule: manningham_schedule(),
        });
        let plugin = CouncilPlugin {
            area,
            address_port: Arc::clone(&port) as Arc<dyn AddressPort>,
            schedule_port: port,
        };
        BinsoutService::new(Arc::new(CouncilRegistry::new(vec![plugin])))
    }

    #[tokio::test]
    async fn doncaster_query_resolves_to_manningham_general_waste() {
        let service = service();
        let resolution = service
            .resolve(&AddressQuery::new("DonCaster"))
            .await
            .expect("static provider cannot fail")
            .expect("doncaster query must match the sample address");

        assert_eq!(
            resolution.address.label,
            "123 Main Street, Doncaster VIC 3108"
        );

        let council = resolution.council.expect("address lies inside Manningham");
        assert_eq!(council.area.meta.name, "Manningham City Council");
        assert_eq!(council.schedule.rule(BinType::General).day_name(), "Tuesday");
        assert_eq!(
            council.schedule.rule(BinType::General).cadence,
            Cadence::Weekly
        );
    }

    #[tokio::test]
    async fn donvale_query_resolves_recycling_fortnightly_week_a() {
        let service = service();
        let resolution = service
            .resolve(&AddressQuery::new("anywhere near donvale"))
            .await
            .expect("static provider cannot fail")
            .expect("donvale keyword must match the sample address");

        let council = resolution.council.expect("address lies inside Manningham");
        let recycling = council.schedule.rule(BinType::Recycling);
        assert_eq!(recycling.day_name(), "Tuesday");
        assert_eq!(recycling.cadence.to_string(), "Fortnightly (Week A)");
    }

    #[tokio::test]
    async fn unmatched_query_resolves_to_none() {
        let service = service();
        let resolution = service
            .resolve(&AddressQuery::new("12 Unknown Street, Geelong"))
            .await
            .expect("static provider cannot fail");
        assert!(resolution.is_none(), "unknown address must yield no result");
    }

    #[tokio::test]
    async fn blank_query_resolves_to_none() {
        let service = service();
        let resolution = service
            .resolve(&AddressQuery::new("   "))
            .await
            .expect("static provider cannot fail");
        assert!(resolution.is_none(), "blank query must yield no result");
    }

    #[tokio::test]
    async fn matched_address_outside_all_areas_is_undetermined() {
        let service = service();
        let resolution = service
            .resolve(&AddressQuery::new("Remote Road"))
            .await
            .expect("static provider cannot fail")
            .expect("label substring must match the Warrandyte address");

        assert!(
            resolution.council.is_none(),
            "coordinate outside every bounding box must leave the council undetermined"
        );
    }

    #[tokio::test]
    async fn collection_rule_looks_up_a_single_bin() {
        let service = service();
        let council = CouncilId(String::from("manningham"));
        let rule = service
            .collection_rule(&council, BinType::Green)
            .await
            .expect("known council must have a schedule");
        assert_eq!(rule.day_name(), "Friday");
        assert_eq!(rule.cadence, Cadence::Fortnightly(WeekParity::B));
    }

    #[tokio::test]
    async fn collection_rule_rejects_unknown_council() {
        let service = service();
        let council = CouncilId(String::from("nowhere"));
        let outcome = service.collection_rule(&council, BinType::General).await;
        assert!(
            matches!(outcome, Err(LookupError::UnknownCouncil)),
            "unknown council must be rejected"
        );
    }

    #[tokio::test]
    async fn search_honors_the_result_limit() {
        let service = service();
        // "street" appears in two sample labels.
        let found = service
            .search_addresses(&AddressQuery::new("Street"), 1)
            .await
            .expect("static provider cannot fail");
        assert_eq!(found.len(), 1, "limit must cap the result count");
    }

    #[test]
    fn locate_council_is_a_pure_geofence_lookup() {
        let service = service();
        let inside = Coordinate {
            lat: -37.77,
            lng: 145.13,
        };
        let outside = Coordinate {
            lat: -37.05,
            lng: 145.22,
        };
        assert_eq!(
            service
                .locate_council(inside)
                .map(|area| area.meta.name),
            Some(String::from("Manningham City Council"))
        );
        assert!(service.locate_council(outside).is_none());
    }
}
