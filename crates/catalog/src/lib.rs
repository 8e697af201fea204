//! # Fondo Catalog
//!
//! The read-only fund catalog. It is built once per session from the
//! configured seed and never mutated afterwards; every other component
//! resolves fund ids against it.

use configuration::FundSeed;
use core_types::{Fund, FundId};
use std::collections::BTreeMap;

pub mod error;

pub use error::CatalogError;

/// The immutable-per-session mapping from fund id to its terms.
#[derive(Debug, Clone)]
pub struct FundCatalog {
    funds: BTreeMap<FundId, Fund>,
}

impl FundCatalog {
    /// Builds the catalog from the configured seed entries.
    ///
    /// Risk levels left unset in the seed fall back to the category's
    /// conventional classification.
    pub fn from_seed(seed: &[FundSeed]) -> Result<Self, CatalogError> {
        if seed.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut funds = BTreeMap::new();
        for entry in seed {
            let risk_level = entry
                .risk_level
                .unwrap_or_else(|| entry.category.default_risk_level());
            let fund = Fund::new(
                entry.id,
                entry.name.clone(),
                entry.minimum_investment,
                entry.category,
                risk_level,
            )?;
            if funds.insert(fund.id, fund).is_some() {
                return Err(CatalogError::DuplicateFund(entry.id));
            }
        }

        tracing::debug!(fund_count = funds.len(), "Fund catalog loaded.");
        Ok(Self { funds })
    }

    /// Looks up a single fund by id.
    pub fn get(&self, fund_id: FundId) -> Option<&Fund> {
        self.funds.get(&fund_id)
    }

    /// All funds, ordered by id.
    pub fn funds(&self) -> Vec<Fund> {
        self.funds.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{FundCategory, RiskLevel};
    use rust_decimal_macros::dec;

    fn seed(id: FundId, name: &str, minimum: rust_decimal::Decimal) -> FundSeed {
        FundSeed {
            id,
            name: name.to_string(),
            minimum_investment: minimum,
            category: FundCategory::Fpv,
            risk_level: None,
        }
    }

    #[test]
    fn builds_catalog_and_resolves_ids() {
        let catalog = FundCatalog::from_seed(&[
            seed(1, "FPV_EL_CLIENTE_RECAUDADORA", dec!(75_000)),
            seed(2, "FPV_EL_CLIENTE_ECOPETROL", dec!(125_000)),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().minimum_investment, dec!(125_000));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn risk_level_defaults_by_category() {
        let mut fic = seed(4, "FDO-ACCIONES", dec!(250_000));
        fic.category = FundCategory::Fic;
        let catalog = FundCatalog::from_seed(&[fic]).unwrap();
        assert_eq!(catalog.get(4).unwrap().risk_level, RiskLevel::High);
    }

    #[test]
    fn explicit_risk_level_wins() {
        let mut entry = seed(5, "FPV_EL_CLIENTE_DINAMICA", dec!(100_000));
        entry.risk_level = Some(RiskLevel::Low);
        let catalog = FundCatalog::from_seed(&[entry]).unwrap();
        assert_eq!(catalog.get(5).unwrap().risk_level, RiskLevel::Low);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = FundCatalog::from_seed(&[
            seed(1, "FPV_EL_CLIENTE_RECAUDADORA", dec!(75_000)),
            seed(1, "DEUDAPRIVADA", dec!(50_000)),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateFund(1))));
    }

    #[test]
    fn rejects_empty_seed() {
        assert!(matches!(
            FundCatalog::from_seed(&[]),
            Err(CatalogError::EmptyCatalog)
        ));
    }
}
