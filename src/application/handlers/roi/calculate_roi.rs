//! CalculateRoiHandler - Command handler for running an ROI projection.
//!
//! Runs the pure engine and stamps the result with an identifier and the
//! calculation time, so the engine itself stays free of clocks and I/O.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::foundation::{CalculationId, Timestamp};
use crate::domain::roi::{CalculationInput, CalculationReport, ROICalculator, RoiError};

/// Command to compute an ROI projection.
#[derive(Debug, Clone)]
pub struct CalculateRoiCommand {
    pub input: CalculationInput,
}

/// A completed calculation: inputs, report and provenance.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRecord {
    pub calculation_id: CalculationId,
    pub calculation_date: Timestamp,
    pub input: CalculationInput,
    pub report: CalculationReport,
}

/// Handler for ROI calculations.
pub struct CalculateRoiHandler {
    calculator: ROICalculator,
}

impl CalculateRoiHandler {
    pub fn new(calculator: ROICalculator) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, cmd: CalculateRoiCommand) -> Result<CalculationRecord, RoiError> {
        let report = match self.calculator.compute(&cmd.input) {
            Ok(report) => report,
            Err(err) => {
                info!(error = %err, "ROI calculation rejected");
                return Err(err);
            }
        };

        let record = CalculationRecord {
            calculation_id: CalculationId::new(),
            calculation_date: Timestamp::now(),
            input: cmd.input,
            report,
        };

        debug!(
            calculation_id = %record.calculation_id,
            roi_percentage = record.report.roi_percentage,
            payback_months = record.report.payback_months,
            profitable = record.report.is_profitable(),
            "ROI calculation completed"
        );

        Ok(record)
    }
}
