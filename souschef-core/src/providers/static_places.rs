//! Canned places provider, standing in for a real maps/places API.

use async_trait::async_trait;

use super::{PlacesProvider, ProviderError};
use crate::types::Venue;

#[derive(Debug, Default)]
pub struct StaticPlaces;

impl StaticPlaces {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlacesProvider for StaticPlaces {
    async fn nearby_search(
        &self,
        cuisine: &str,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Venue>, ProviderError> {
        Ok(vec![
            Venue {
                name: format!("{cuisine} Bistro"),
                rating: 4.5,
                distance_km: 1.2,
                lat,
                lng,
            },
            Venue {
                name: format!("{cuisine} Kitchen"),
                rating: 4.2,
                distance_km: 2.1,
                lat,
                lng,
            },
        ])
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_venues_carry_cuisine_and_coordinates() {
        let places = StaticPlaces::new();
        let venues = places.nearby_search("Italian", 41.76, -72.67).await.unwrap();
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].name, "Italian Bistro");
        assert_eq!(venues[1].name, "Italian Kitchen");
        assert_eq!(venues[0].lat, 41.76);
        assert_eq!(venues[0].lng, -72.67);
    }
}
