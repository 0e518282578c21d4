#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use pokedex_lib::{CatalogEntry, CatalogSource, ClientError, PokemonDetail, TypeName};
use tokio::sync::Semaphore;

const TYPES: [&str; 3] = ["Water", "Fire", "Grass"];

/// `n` entries named `mon-0..n`, types cycling Water/Fire/Grass.
pub fn page(n: u32) -> Vec<CatalogEntry> {
    (0..n)
        .map(|i| {
            CatalogEntry::new(
                format!("mon-{i}"),
                format!("https://img/{i}.png"),
                vec![TypeName::new(TYPES[i as usize % TYPES.len()])],
            )
            .with_number(format!("{:03}", i + 1))
        })
        .collect()
}

/// In-memory catalog. When gated, each page fetch waits for one permit
/// released by the test, which keeps requests in flight on demand.
pub struct FakeSource {
    gate: Option<Semaphore>,
    page_calls: Mutex<Vec<u32>>,
    failing_pages: Mutex<HashSet<u32>>,
    null_pages: Mutex<HashSet<u32>>,
    type_names: Option<Vec<String>>,
    details: HashMap<String, PokemonDetail>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            gate: None,
            page_calls: Mutex::new(Vec::new()),
            failing_pages: Mutex::new(HashSet::new()),
            null_pages: Mutex::new(HashSet::new()),
            type_names: Some(vec!["water".into(), "fire".into(), "grass".into()]),
            details: HashMap::new(),
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn without_type_menu(mut self) -> Self {
        self.type_names = None;
        self
    }

    pub fn with_detail(mut self, detail: PokemonDetail) -> Self {
        self.details.insert(detail.name.clone(), detail);
        self
    }

    /// Let `n` gated fetches proceed.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn fail_page(&self, first: u32) {
        self.failing_pages.lock().unwrap().insert(first);
    }

    /// Answer `first` the way the client answers a `null` list.
    pub fn null_page(&self, first: u32) {
        self.null_pages.lock().unwrap().insert(first);
    }

    pub fn calls(&self) -> Vec<u32> {
        self.page_calls.lock().unwrap().clone()
    }
}

impl CatalogSource for FakeSource {
    async fn fetch_page(&self, first: u32) -> Result<Vec<CatalogEntry>, ClientError> {
        self.page_calls.lock().unwrap().push(first);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.failing_pages.lock().unwrap().contains(&first) {
            return Err(ClientError::ServerError {
                status: 502,
                message: "bad gateway".into(),
            });
        }
        if self.null_pages.lock().unwrap().contains(&first) {
            return Err(ClientError::malformed("pokemons was null"));
        }
        Ok(page(first))
    }

    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetail, ClientError> {
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    async fn fetch_type_names(&self) -> Result<Vec<String>, ClientError> {
        self.type_names
            .clone()
            .ok_or_else(|| ClientError::malformed("type index unavailable"))
    }
}
