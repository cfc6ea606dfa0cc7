//! Summary-search criteria and the fixed field projection.

/// Fields requested from `/materials/summary/` and kept in every record.
pub const SUMMARY_FIELDS: [&str; 8] = [
    "material_id",
    "formula_pretty",
    "chemsys",
    "band_gap",
    "density",
    "is_stable",
    "energy_above_hull",
    "nelements",
];

/// Default number of records when the caller does not pass a limit.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page the summary endpoint accepts.
pub const MAX_LIMIT: u32 = 1000;

/// What to search by. Exactly one criterion per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Hyphen-joined element symbols, e.g. `Li-Fe-O`.
    ChemSys(String),
    /// Chemical formula, e.g. `LiFePO4`.
    Formula(String),
}

impl SearchCriterion {
    /// Picks the criterion from optional inputs; chemsys wins when both are
    /// present. Blank strings count as absent.
    pub fn from_parts(chemsys: Option<&str>, formula: Option<&str>) -> Option<Self> {
        fn clean(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        clean(chemsys)
            .map(|c| Self::ChemSys(c.to_string()))
            .or_else(|| clean(formula).map(|f| Self::Formula(f.to_string())))
    }

    /// Query parameter name understood by the summary endpoint.
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::ChemSys(_) => "chemsys",
            Self::Formula(_) => "formula",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::ChemSys(v) | Self::Formula(v) => v,
        }
    }
}

/// One summary search: a criterion plus the maximum number of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySearch {
    pub criterion: SearchCriterion,
    pub limit: u32,
}

impl SummarySearch {
    pub fn new(criterion: SearchCriterion, limit: u32) -> Self {
        Self { criterion, limit }
    }

    /// Query string pairs: criterion, `_limit`, `_fields`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (self.criterion.param_name(), self.criterion.value().to_string()),
            ("_limit", self.limit.to_string()),
            ("_fields", SUMMARY_FIELDS.join(",")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chemsys_takes_precedence() {
        let c = SearchCriterion::from_parts(Some("Li-Fe-O"), Some("LiFeO2")).unwrap();
        assert_eq!(c, SearchCriterion::ChemSys("Li-Fe-O".into()));
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(SearchCriterion::from_parts(None, None), None);
        assert_eq!(SearchCriterion::from_parts(Some("  "), Some("")), None);
        assert_eq!(
            SearchCriterion::from_parts(Some(""), Some(" Fe2O3 ")),
            Some(SearchCriterion::Formula("Fe2O3".into()))
        );
    }

    #[test]
    fn params_carry_fixed_field_list() {
        let s = SummarySearch::new(SearchCriterion::ChemSys("Li-Fe-O".into()), 5);
        let params = s.to_params();

        assert_eq!(params[0], ("chemsys", "Li-Fe-O".to_string()));
        assert_eq!(params[1], ("_limit", "5".to_string()));
        assert_eq!(
            params[2].1,
            "material_id,formula_pretty,chemsys,band_gap,density,is_stable,energy_above_hull,nelements"
        );
    }
}
