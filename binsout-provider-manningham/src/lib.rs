//! Provider implementation for Manningham City Council.
//!
//! Carries the council's sample service-area data in-crate. Ports simulate
//! the latency of the upstream geocoding and schedule services with a timer;
//! a production provider would issue real network requests here instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Weekday;

use binsout_core::{
    model::{
        Address, BoundingBox, Cadence, CollectionRule, ContactInfo, Coordinate, CouncilId,
        CouncilMeta, Schedule, ServiceArea, WeekParity,
    },
    plugin::CouncilPlugin,
    ports::{AddressPort, AddressQuery, LookupError, SchedulePort},
};

/// Map color used for the Manningham service area.
const AREA_COLOR: &str = "#22c55e";

/// Address lookup implementation for Manningham.
pub struct ManninghamAddressPort {
    meta: CouncilMeta,
    addresses: Vec<Address>,
    latency: Duration,
}

impl ManninghamAddressPort {
    /// Create a new address port with the given simulated backend latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            meta: council_meta(),
            addresses: sample_addresses(),
            latency,
        }
    }
}

#[async_trait]
impl AddressPort for ManninghamAddressPort {
    fn council(&self) -> &CouncilMeta {
        &self.meta
    }

    async fn search(
        &self,
        query: &AddressQuery,
        limit: usize,
    ) -> Result<Vec<Address>, LookupError> {
        if limit == 0 || query.is_empty() {
            return Ok(Vec::new());
        }

        // Stands in for the upstream geocoding call.
        tokio::time::sleep(self.latency).await;

        Ok(self
            .addresses
            .iter()
            .filter(|address| address.matches(&query.text))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Kerbside schedule implementation for Manningham.
pub struct ManninghamSchedulePort {
    meta: CouncilMeta,
    schedule: Schedule,
    latency: Duration,
}

impl ManninghamSchedulePort {
    /// Create a new schedule port with the given simulated backend latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            meta: council_meta(),
            schedule: kerbside_schedule(),
            latency,
        }
    }
}

#[async_trait]
impl SchedulePort for ManninghamSchedulePort {
    fn council(&self) -> &CouncilMeta {
        &self.meta
    }

    async fn schedule(&self) -> Result<Schedule, LookupError> {
        tokio::time::sleep(self.latency).await;
        Ok(self.schedule.clone())
    }
}

/// Build the plugin bundle for the Manningham provider.
#[must_use]
pub fn plugin(latency: Duration) -> CouncilPlugin {
    let address_port = Arc::new(ManninghamAddressPort::new(latency));
    let schedule_port = Arc::new(ManninghamSchedulePort::new(latency));

    CouncilPlugin {
        area: service_area(),
        address_port,
        schedule_port,
    }
}

fn council_meta() -> CouncilMeta {
    CouncilMeta {
        id: CouncilId(String::from("manningham")),
        name: String::from("Manningham City Council"),
        contact: ContactInfo {
            phone: String::from("(03) 9840 9333"),
            email: String::from("info@manningham.vic.gov.au"),
        },
    }
}

fn service_area() -> ServiceArea {
    ServiceArea {
        meta: council_meta(),
        // Rough extents of the Doncaster/Donvale area.
        bounds: BoundingBox {
            north: -37.75,
            south: -37.8,
            east: 145.15,
            west: 145.1,
        },
        color: String::from(AREA_COLOR),
    }
}

fn sample_addresses() -> Vec<Address> {
    vec![
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
    ]
}

fn kerbside_schedule() -> Schedule {
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
