//! `cinema-app` — the application-level registry.
//!
//! Entities compose only at this level: the [`Cinema`] owns one extent per
//! entity type and knows how to persist and restore all of them as a set of
//! flat files, one per type.

pub mod telemetry;

use std::path::Path;

use cinema_catalog::{Actor, Movie};
use cinema_core::{Extent, StoreError};
use cinema_people::{Customer, Employee};
use cinema_sales::{Order, Stampcard};
use cinema_venue::{Hall, Seat};

const ACTORS_FILE: &str = "actors.json";
const CUSTOMERS_FILE: &str = "customers.json";
const EMPLOYEES_FILE: &str = "employees.json";
const HALLS_FILE: &str = "halls.json";
const MOVIES_FILE: &str = "movies.json";
const ORDERS_FILE: &str = "orders.json";
const SEATS_FILE: &str = "seats.json";
const STAMPCARDS_FILE: &str = "stampcards.json";

/// Explicit owner of the parallel entity extents.
///
/// There is no hidden static state; whoever constructs entities holds a
/// `Cinema` (or the individual extents) and passes it along.
#[derive(Debug, Default)]
pub struct Cinema {
    pub actors: Extent<Actor>,
    pub customers: Extent<Customer>,
    pub employees: Extent<Employee>,
    pub halls: Extent<Hall>,
    pub movies: Extent<Movie>,
    pub orders: Extent<Order>,
    pub seats: Extent<Seat>,
    pub stampcards: Extent<Stampcard>,
}

impl Cinema {
    /// A cinema with every extent empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every extent. Saved files are unaffected.
    pub fn clear(&mut self) {
        self.actors.clear();
        self.customers.clear();
        self.employees.clear();
        self.halls.clear();
        self.movies.clear();
        self.orders.clear();
        self.seats.clear();
        self.stampcards.clear();
    }

    /// Save every extent to `dir`, one JSON file per entity type.
    pub fn save_to(&self, dir: &Path) -> Result<(), StoreError> {
        self.actors.save(&dir.join(ACTORS_FILE))?;
        self.customers.save(&dir.join(CUSTOMERS_FILE))?;
        self.employees.save(&dir.join(EMPLOYEES_FILE))?;
        self.halls.save(&dir.join(HALLS_FILE))?;
        self.movies.save(&dir.join(MOVIES_FILE))?;
        self.orders.save(&dir.join(ORDERS_FILE))?;
        self.seats.save(&dir.join(SEATS_FILE))?;
        self.stampcards.save(&dir.join(STAMPCARDS_FILE))?;
        tracing::info!(dir = %dir.display(), "cinema saved");
        Ok(())
    }

    /// Load every extent from `dir`, replacing the current contents.
    ///
    /// All files are loaded into a fresh registry first; on any failure the
    /// current registry is left unchanged.
    pub fn load_from(&mut self, dir: &Path) -> Result<(), StoreError> {
        let mut loaded = Cinema::new();
        loaded.actors.load(&dir.join(ACTORS_FILE))?;
        loaded.customers.load(&dir.join(CUSTOMERS_FILE))?;
        loaded.employees.load(&dir.join(EMPLOYEES_FILE))?;
        loaded.halls.load(&dir.join(HALLS_FILE))?;
        loaded.movies.load(&dir.join(MOVIES_FILE))?;
        loaded.orders.load(&dir.join(ORDERS_FILE))?;
        loaded.seats.load(&dir.join(SEATS_FILE))?;
        loaded.stampcards.load(&dir.join(STAMPCARDS_FILE))?;
        *self = loaded;
        tracing::info!(dir = %dir.display(), "cinema loaded");
        Ok(())
    }
}
