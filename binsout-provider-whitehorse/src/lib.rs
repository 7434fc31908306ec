//! Provider implementation for Whitehorse City Council.
//!
//! Ships the council's service area and kerbside schedule; the sample
//! address book is empty, so searches resolve into Whitehorse only through
//! the geofence when an address from another dataset lands in its bounds.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Weekday;

use binsout_core::{
    model::{
        Address, BoundingBox, Cadence, CollectionRule, ContactInfo, CouncilId, CouncilMeta,
        Schedule, ServiceArea, WeekParity,
    },
    plugin::CouncilPlugin,
    ports::{AddressPort, AddressQuery, LookupError, SchedulePort},
};

/// Map color used for the Whitehorse service area.
const AREA_COLOR: &str = "#3b82f6";

/// Address lookup implementation for Whitehorse. The sample dataset carries
/// no addresses for this council, so every search returns empty.
pub struct WhitehorseAddressPort {
    meta: CouncilMeta,
}

impl WhitehorseAddressPort {
    /// Create a new address port.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: council_meta(),
        }
    }
}

impl Default for WhitehorseAddressPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressPort for WhitehorseAddressPort {
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

/// Kerbside schedule implementation for Whitehorse.
pub struct WhitehorseSchedulePort {
    meta: CouncilMeta,
    schedule: Schedule,
    latency: Duration,
}

impl WhitehorseSchedulePort {
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
impl SchedulePort for WhitehorseSchedulePort {
    fn council(&self) -> &CouncilMeta {
        &self.meta
    }

    async fn schedule(&self) -> Result<Schedule, LookupError> {
        tokio::time::sleep(self.latency).await;
        Ok(self.schedule.clone())
    }
}

/// Build the plugin bundle for the Whitehorse provider.
#[must_use]
pub fn plugin(latency: Duration) -> CouncilPlugin {
    let address_port = Arc::new(WhitehorseAddressPort::new());
    let schedule_port = Arc::new(WhitehorseSchedulePort::new(latency));

    CouncilPlugin {
        area: service_area(),
        address_port,
        schedule_port,
    }
}

fn council_meta() -> CouncilMeta {
    CouncilMeta {
        id: CouncilId(String::from("whitehorse")),
        name: String::from("Whitehorse City Council"),
        contact: ContactInfo {
            phone: String::from("(03) 9262 6333"),
            email: String::from("customer.service@whitehorse.vic.gov.au"),
        },
    }
}

fn service_area() -> ServiceArea {
    ServiceArea {
        meta: council_meta(),
        // Directly south of the Manningham box; the two share the -37.8
        // latitude edge.
        bounds: BoundingBox {
            north: -37.8,
            south: -37.85,
            east: 145.15,
            west: 145.1,
        },
        color: String::from(AREA_COLOR),
    }
}

fn kerbside_schedule() -> Schedule {
    Schedule {
        general: CollectionRule {
            day: Weekday::Wed,
            cadence: Cadence::Weekly,
        },
        recycling: CollectionRule {
            day: Weekday::Wed,
            cadence: Cadence::Fortnightly(WeekParity::A),
        },
        green: CollectionRule {
            day: Weekday::Mon,
            cadence: Cadence::Fortnightly(WeekParity::B),
        },
    }
}
