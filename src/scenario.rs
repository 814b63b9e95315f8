//! # Scenario
//!
//! Builds a hole and its pegs from a `ScenarioConfig` and tries every peg.
//!
//! Square pegs are stored as-is and only wrapped in a `SquarePegAdapter`
//! at the moment they are measured.

use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::SquarePegAdapter;
use crate::core::config::{ConfigResult, PegSpec, ScenarioConfig};
use crate::core::{FitCheck, RoundHole, RoundPeg, SquarePeg};
use crate::ports::RadiusProvider;

#[derive(Clone, Debug)]
enum Peg {
    Round(RoundPeg),
    Square(SquarePeg),
}

/// Result of trying one labelled peg
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FitReport {
    pub label: String,
    pub kind: &'static str,
    /// Side length, for square pegs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Radius as seen by the hole (equivalent radius for square pegs)
    pub radius: f64,
    pub fits: bool,
    pub clearance: f64,
}

impl FitReport {
    fn new(label: &str, kind: &'static str, width: Option<f64>, check: FitCheck) -> Self {
        Self {
            label: label.to_string(),
            kind,
            width,
            radius: check.peg_radius,
            fits: check.fits,
            clearance: check.clearance,
        }
    }
}

/// A hole and the labelled pegs to try in it
#[derive(Clone, Debug)]
pub struct Scenario {
    hole: RoundHole,
    pegs: Vec<(String, Peg)>,
}

impl Scenario {
    /// Validate a configuration and build its shapes
    pub fn from_config(config: &ScenarioConfig) -> ConfigResult<Self> {
        config.validate()?;

        let pegs = config
            .pegs
            .iter()
            .map(|spec| match spec {
                PegSpec::Round { label, radius } => {
                    (label.clone(), Peg::Round(RoundPeg::new(*radius)))
                }
                PegSpec::Square { label, width } => {
                    (label.clone(), Peg::Square(SquarePeg::new(*width)))
                }
            })
            .collect();

        Ok(Self {
            hole: RoundHole::new(config.hole_radius),
            pegs,
        })
    }

    /// Hole of radius 5 with a small (5) and a large (10) square peg
    pub fn demo() -> Self {
        let hole = RoundHole::new(5.0);
        let pegs = vec![
            ("Small square peg".to_string(), Peg::Square(SquarePeg::new(5.0))),
            ("Large square peg".to_string(), Peg::Square(SquarePeg::new(10.0))),
        ];
        Self { hole, pegs }
    }

    pub fn hole(&self) -> &RoundHole {
        &self.hole
    }

    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Try every peg in declaration order
    pub fn run(&self) -> Vec<FitReport> {
        info!(hole_radius = self.hole.radius(), pegs = self.pegs.len(), "Running scenario");

        self.pegs
            .iter()
            .map(|(label, peg)| {
                let report = match peg {
                    Peg::Round(round) => self.try_peg(label, None, round),
                    Peg::Square(square) => {
                        self.try_peg(label, Some(square.width), &SquarePegAdapter::new(square))
                    }
                };
                debug!(
                    label = %report.label,
                    kind = report.kind,
                    radius = report.radius,
                    fits = report.fits,
                    "Checked peg"
                );
                report
            })
            .collect()
    }

    fn try_peg<P: RadiusProvider>(&self, label: &str, width: Option<f64>, peg: &P) -> FitReport {
        FitReport::new(label, peg.kind(), width, self.hole.check(peg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_results() {
        let reports = Scenario::demo().run();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].label, "Small square peg");
        assert_eq!(reports[0].kind, "square");
        assert_eq!(reports[0].width, Some(5.0));
        assert!((reports[0].radius - 3.5355).abs() < 0.0001);
        assert!(reports[0].fits);

        assert_eq!(reports[1].label, "Large square peg");
        assert!((reports[1].radius - 7.0711).abs() < 0.0001);
        assert!(!reports[1].fits);
        assert!(reports[1].clearance < 0.0);
    }

    #[test]
    fn test_default_config_matches_demo() {
        let from_config = Scenario::from_config(&ScenarioConfig::default()).unwrap();
        assert_eq!(from_config.run(), Scenario::demo().run());
    }

    #[test]
    fn test_mixed_pegs_keep_order() {
        let config = ScenarioConfig::new(5.0)
            .with_peg(PegSpec::round("dowel", 5.0))
            .with_peg(PegSpec::square("block", 7.0))
            .with_peg(PegSpec::round("post", 6.0));
        let scenario = Scenario::from_config(&config).unwrap();
        assert_eq!(scenario.len(), 3);
        assert_eq!(scenario.hole().radius(), 5.0);

        let reports = scenario.run();
        let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["dowel", "block", "post"]);

        assert_eq!(reports[0].kind, "round");
        assert_eq!(reports[0].width, None);
        assert!(reports[0].fits);
        assert_eq!(reports[0].clearance, 0.0);

        assert_eq!(reports[1].kind, "square");
        assert!(reports[1].fits);

        assert!(!reports[2].fits);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScenarioConfig::new(-1.0).with_peg(PegSpec::round("dowel", 1.0));
        assert!(Scenario::from_config(&config).is_err());
    }

    #[test]
    fn test_report_json() {
        let reports = Scenario::demo().run();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["label"], "Small square peg");
        assert_eq!(json[0]["kind"], "square");
        assert_eq!(json[0]["fits"], true);
        assert_eq!(json[1]["fits"], false);

        let config = ScenarioConfig::new(1.0).with_peg(PegSpec::round("r", 1.0));
        let round = Scenario::from_config(&config).unwrap().run();
        let json = serde_json::to_value(&round).unwrap();
        assert!(json[0].get("width").is_none());
    }
}
