use std::collections::BTreeMap;

use crate::api::facility_dto::FacilityDto;
use crate::domain::utils::id::FacilityId;
use crate::error::{Error, Result};

/// A prison unit able to host custody hearings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    id: FacilityId,
    name: String,

    /// Number of hearings the facility can host concurrently in one slot.
    /// Always `>= 1`.
    room_count: i64,
}

impl Facility {
    pub fn new(id: FacilityId, name: impl Into<String>, room_count: i64) -> Result<Self> {
        if room_count < 1 {
            return Err(Error::InvalidCapacity(room_count));
        }

        Ok(Facility { id, name: name.into(), room_count })
    }

    pub fn from_dto(dto: FacilityDto) -> Result<Self> {
        Self::new(FacilityId::new(dto.id), dto.name, dto.room_count)
    }

    pub fn id(&self) -> &FacilityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_count(&self) -> i64 {
        self.room_count
    }
}

/// Facilities of a snapshot, keyed and iterated by id.
#[derive(Debug, Clone, Default)]
pub struct Facilities {
    facilities: BTreeMap<FacilityId, Facility>,
}

impl Facilities {
    pub fn new() -> Self {
        Facilities { facilities: BTreeMap::new() }
    }

    pub fn from_dto(dtos: Vec<FacilityDto>) -> Result<Self> {
        let mut facilities = Facilities::new();

        for dto in dtos {
            facilities.insert(Facility::from_dto(dto)?)?;
        }

        Ok(facilities)
    }

    /// Adds `facility`; a second facility with the same id is rejected.
    pub fn insert(&mut self, facility: Facility) -> Result<()> {
        if self.facilities.contains_key(facility.id()) {
            return Err(Error::ModelConstructionError(format!("facility '{}' is defined more than once", facility.id())));
        }

        self.facilities.insert(facility.id().clone(), facility);
        Ok(())
    }

    pub fn get(&self, id: &FacilityId) -> Option<&Facility> {
        self.facilities.get(id)
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.values()
    }

    pub fn to_vec(&self) -> Vec<Facility> {
        self.facilities.values().cloned().collect()
    }
}
