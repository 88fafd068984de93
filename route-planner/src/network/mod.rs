//! Flight network model.
//!
//! An adjacency-list graph of cities. Every connection added between two
//! cities is stored in both directions with identical weights, and repeated
//! connections between the same pair are kept as parallel edges.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{CityName, DomainError};

/// A directed, weighted edge owned by its source city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Destination city
    pub to: CityName,
    /// Ticket cost
    pub cost: u64,
    /// Travel time in minutes
    pub time: u64,
}

impl Connection {
    pub fn new(to: CityName, cost: u64, time: u64) -> Self {
        Self { to, cost, time }
    }
}

/// A city and its outgoing connections, in insertion order.
#[derive(Debug, Clone)]
pub struct City {
    name: CityName,
    connections: Vec<Connection>,
}

impl City {
    fn new(name: CityName) -> Self {
        Self {
            name,
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &CityName {
        &self.name
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// The whole network.
///
/// Cities are created on first reference and never removed. Lookup is
/// case-insensitive; the first spelling seen is the one displayed.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    cities: Vec<City>,
    index: HashMap<CityName, usize>,
}

impl FlightNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection between two cities.
    ///
    /// Both cities are created if they don't exist yet, and the connection
    /// is stored symmetrically (both A→B and B→A).
    pub fn add_connection(&mut self, a: &CityName, b: &CityName, cost: u64, time: u64) {
        let a_idx = self.find_or_create(a);
        let b_idx = self.find_or_create(b);

        let a_name = self.cities[a_idx].name.clone();
        let b_name = self.cities[b_idx].name.clone();

        trace!(from = %a_name, to = %b_name, cost, time, "adding connection");

        self.cities[a_idx]
            .connections
            .push(Connection::new(b_name, cost, time));
        self.cities[b_idx]
            .connections
            .push(Connection::new(a_name, cost, time));
    }

    /// Look up a city by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&City> {
        let name = CityName::new(name).ok()?;
        self.get(&name)
    }

    /// Look up a city by validated name.
    pub fn get(&self, name: &CityName) -> Option<&City> {
        self.index.get(name).map(|&idx| &self.cities[idx])
    }

    /// Check whether a city exists.
    pub fn contains(&self, name: &CityName) -> bool {
        self.index.contains_key(name)
    }

    /// All cities in the order they were first referenced.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns the number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of connections (counting A→B and B→A as one).
    pub fn connection_count(&self) -> usize {
        self.cities
            .iter()
            .map(|c| c.connections.len())
            .sum::<usize>()
            / 2
    }

    /// Returns true if the network has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn find_or_create(&mut self, name: &CityName) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.cities.len();
        self.cities.push(City::new(name.clone()));
        self.index.insert(name.clone(), idx);
        idx
    }
}

/// Builder for creating networks from string names.
///
/// Provides a fluent API for adding connections.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: FlightNetwork,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is blank.
    pub fn try_add(mut self, a: &str, b: &str, cost: u64, time: u64) -> Result<Self, DomainError> {
        let a = CityName::new(a)?;
        let b = CityName::new(b)?;
        self.inner.add_connection(&a, &b, cost, time);
        Ok(self)
    }

    /// Add a connection, ignoring it if either name is blank.
    pub fn add(mut self, a: &str, b: &str, cost: u64, time: u64) -> Self {
        if let (Ok(a), Ok(b)) = (CityName::new(a), CityName::new(b)) {
            self.inner.add_connection(&a, &b, cost, time);
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> FlightNetwork {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> CityName {
        CityName::new(s).unwrap()
    }

    #[test]
    fn empty_network() {
        let net = FlightNetwork::new();
        assert!(net.is_empty());
        assert_eq!(net.city_count(), 0);
        assert_eq!(net.connection_count(), 0);
        assert!(net.lookup("Dallas").is_none());
    }

    #[test]
    fn add_creates_both_directions() {
        let mut net = FlightNetwork::new();
        net.add_connection(&city("Dallas"), &city("Austin"), 50, 60);

        assert_eq!(net.city_count(), 2);
        assert_eq!(net.connection_count(), 1);

        let dallas = net.lookup("Dallas").unwrap();
        assert_eq!(dallas.connections(), &[Connection::new(city("Austin"), 50, 60)]);

        let austin = net.lookup("Austin").unwrap();
        assert_eq!(austin.connections(), &[Connection::new(city("Dallas"), 50, 60)]);
    }

    #[test]
    fn lookup_ignores_case() {
        let net = NetworkBuilder::new().add("Dallas", "Austin", 50, 60).build();

        let found = net.lookup("dALLAS").unwrap();
        assert_eq!(found.name().as_str(), "Dallas");
        assert!(net.lookup("").is_none());
        assert!(net.lookup("Houston").is_none());
    }

    #[test]
    fn first_spelling_wins() {
        let net = NetworkBuilder::new()
            .add("Dallas", "Austin", 50, 60)
            .add("DALLAS", "Houston", 120, 70)
            .build();

        assert_eq!(net.city_count(), 3);
        let dallas = net.lookup("dallas").unwrap();
        assert_eq!(dallas.name().as_str(), "Dallas");
        assert_eq!(dallas.connections().len(), 2);

        // Houston's edge back points at the canonical spelling
        let houston = net.lookup("Houston").unwrap();
        assert_eq!(houston.connections()[0].to.as_str(), "Dallas");
    }

    #[test]
    fn parallel_connections_are_kept() {
        let net = NetworkBuilder::new()
            .add("Dallas", "Austin", 50, 60)
            .add("Austin", "Dallas", 30, 90)
            .build();

        assert_eq!(net.connection_count(), 2);
        let dallas = net.lookup("Dallas").unwrap();
        assert_eq!(
            dallas.connections(),
            &[
                Connection::new(city("Austin"), 50, 60),
                Connection::new(city("Austin"), 30, 90),
            ]
        );
    }

    #[test]
    fn cities_in_insertion_order() {
        let net = NetworkBuilder::new()
            .add("Seattle", "Portland", 1, 1)
            .add("Boise", "Portland", 1, 1)
            .build();

        let names: Vec<_> = net.cities().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["Seattle", "Portland", "Boise"]);
    }

    #[test]
    fn builder_ignores_blank_names() {
        let net = NetworkBuilder::new()
            .add("", "Austin", 5, 5)
            .add("Dallas", "  ", 5, 5)
            .add("Dallas", "Austin", 5, 5)
            .build();

        assert_eq!(net.connection_count(), 1);
    }

    #[test]
    fn try_add_reports_blank_names() {
        let err = NetworkBuilder::new().try_add("Dallas", " ", 1, 1).unwrap_err();
        assert_eq!(err, DomainError::EmptyCityName);

        let net = NetworkBuilder::new()
            .try_add("Dallas", "Austin", 1, 2)
            .unwrap()
            .build();
        assert!(net.contains(&city("austin")));
    }
}
