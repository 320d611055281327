//! Configuration validation before layout generation.
//!
//! This module clamps module widths to catalog and global bounds, detects
//! layout lines whose modules overflow the line, shrinks auto-width modules
//! to absorb the overflow when the mismatch policy allows it, and prunes
//! hanging modules that reference missing base modules.
//!
//! Validation never fails: every problem is reported as a string in the
//! returned [`ValidationResult`], so callers such as an agent tool always
//! receive a structured answer.

use crate::models::{
    GlobalConstraints, KitchenConfig, LayoutLine, MismatchPolicy, ModuleLibrary, ModuleWidth,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Write as _};
use tracing::debug;

/// Outcome of a single check category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// No issues
    #[default]
    Passed,
    /// Only warnings
    Warning,
    /// At least one error
    Failed,
}

/// Per-category summary of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationChecks {
    /// Width clamping against catalog and global bounds
    pub widths: CheckStatus,
    /// Line overflow detection and auto-fix
    pub overflow: CheckStatus,
    /// Hanging module references
    pub hanging_modules: CheckStatus,
    /// Structural sanity of settings and lines
    pub structure: CheckStatus,
}

impl ValidationChecks {
    fn record(&mut self, kind: ValidationIssueKind, status: CheckStatus) {
        let slot = match kind {
            ValidationIssueKind::WidthClamped | ValidationIssueKind::InvalidWidth => {
                &mut self.widths
            }
            ValidationIssueKind::Overflow | ValidationIssueKind::UnresolvableOverflow => {
                &mut self.overflow
            }
            ValidationIssueKind::DanglingHangingModule => &mut self.hanging_modules,
            ValidationIssueKind::InvalidLine
            | ValidationIssueKind::InvalidSettings
            | ValidationIssueKind::DuplicateModuleId
            | ValidationIssueKind::UnsupportedDirection
            | ValidationIssueKind::MissingRoomDimensions => &mut self.structure,
        };
        *slot = (*slot).max(status);
    }
}

/// Validation result: diagnostics plus the corrected configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when there are no errors (warnings are allowed)
    pub is_valid: bool,
    /// Non-blocking problems, some of which were fixed
    pub warnings: Vec<String>,
    /// Problems that block generation
    pub errors: Vec<String>,
    /// Copy of the input with clamped widths, shrunk auto modules and
    /// pruned hanging modules
    pub fixed_config: KitchenConfig,
    /// Per-category summary
    pub checks: ValidationChecks,
}

impl ValidationResult {
    /// Formats the result as a user-friendly report.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            let _ = writeln!(message, "❌ {} validation errors:", self.errors.len());
            for (idx, error) in self.errors.iter().enumerate() {
                let _ = writeln!(message, "  {}. {}", idx + 1, error);
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            let _ = writeln!(message, "⚠️  {} warnings:", self.warnings.len());
            for (idx, warning) in self.warnings.iter().enumerate() {
                let _ = writeln!(message, "  {}. {}", idx + 1, warning);
            }
        }

        message
    }
}

/// Types of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssueKind {
    /// Width moved into catalog or global bounds
    WidthClamped,
    /// Width is not a finite number
    InvalidWidth,
    /// Modules are wider than their line
    Overflow,
    /// Overflow that no auto module can absorb
    UnresolvableOverflow,
    /// Hanging module aligned with a module that does not exist
    DanglingHangingModule,
    /// Layout line with unusable length
    InvalidLine,
    /// Unusable kitchen-wide setting
    InvalidSettings,
    /// Same module id used more than once
    DuplicateModuleId,
    /// Line direction without a dedicated rotation
    UnsupportedDirection,
    /// Room volume missing
    MissingRoomDimensions,
}

impl fmt::Display for ValidationIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthClamped => write!(f, "Width Clamped"),
            Self::InvalidWidth => write!(f, "Invalid Width"),
            Self::Overflow => write!(f, "Overflow"),
            Self::UnresolvableOverflow => write!(f, "Unresolvable Overflow"),
            Self::DanglingHangingModule => write!(f, "Dangling Hanging Module"),
            Self::InvalidLine => write!(f, "Invalid Layout Line"),
            Self::InvalidSettings => write!(f, "Invalid Settings"),
            Self::DuplicateModuleId => write!(f, "Duplicate Module Id"),
            Self::UnsupportedDirection => write!(f, "Unsupported Direction"),
            Self::MissingRoomDimensions => write!(f, "Missing Room Dimensions"),
        }
    }
}

/// A single diagnostic with optional line/module context.
#[derive(Debug, Clone)]
struct ValidationIssue {
    kind: ValidationIssueKind,
    line: Option<usize>,
    module: Option<String>,
    message: String,
}

impl ValidationIssue {
    fn new(kind: ValidationIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            module: None,
            message: message.into(),
        }
    }

    const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, &self.module) {
            (Some(line), Some(module)) => write!(f, "[Line {line}, module '{module}'] ")?,
            (Some(line), None) => write!(f, "[Line {line}] ")?,
            (None, Some(module)) => write!(f, "[Module '{module}'] ")?,
            (None, None) => {}
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Default)]
struct Diagnostics {
    warnings: Vec<String>,
    errors: Vec<String>,
    checks: ValidationChecks,
}

impl Diagnostics {
    fn warn(&mut self, issue: ValidationIssue) {
        debug!(kind = ?issue.kind, "validation warning: {issue}");
        self.checks.record(issue.kind, CheckStatus::Warning);
        self.warnings.push(issue.to_string());
    }

    fn error(&mut self, issue: ValidationIssue) {
        debug!(kind = ?issue.kind, "validation error: {issue}");
        self.checks.record(issue.kind, CheckStatus::Failed);
        self.errors.push(issue.to_string());
    }

    fn finish(self, fixed_config: KitchenConfig) -> ValidationResult {
        debug!(
            warnings = self.warnings.len(),
            errors = self.errors.len(),
            "validation finished"
        );
        ValidationResult {
            is_valid: self.errors.is_empty(),
            warnings: self.warnings,
            errors: self.errors,
            fixed_config,
            checks: self.checks,
        }
    }
}

/// Validates `config` and returns a fixed copy; the input is never mutated.
///
/// Checks:
/// - Kitchen-wide settings are usable (gap, room volume)
/// - Every numeric module width lies within its variant's and the global bounds
/// - No layout line is overflowed by its fixed-width modules, or the overflow
///   is absorbed by shrinking auto modules (per mismatch policy)
/// - Every hanging module aligns with an existing module
pub fn validate_and_fix(
    config: &KitchenConfig,
    constraints: &GlobalConstraints,
    library: &ModuleLibrary,
) -> ValidationResult {
    let mut diagnostics = Diagnostics::default();
    let mut fixed = config.clone();

    validate_settings(&fixed, &mut diagnostics);

    let policy = fixed.global_settings.mismatch_policy;
    let gap = fixed.global_settings.gap_between_modules;
    for (line_idx, line) in fixed.layout_lines.iter_mut().enumerate() {
        validate_line(
            line_idx,
            line,
            policy,
            gap,
            constraints,
            library,
            &mut diagnostics,
        );
    }

    validate_unique_ids(config, &mut diagnostics);

    // Ids are looked up in the original config; width fixes never change them
    fixed.hanging_modules.retain(|hanging| {
        let target = hanging.align_with_module();
        if config.has_module(target) {
            return true;
        }
        diagnostics.warn(
            ValidationIssue::new(
                ValidationIssueKind::DanglingHangingModule,
                format!("aligns with unknown module '{target}'; removed"),
            )
            .with_module(hanging.module().id.clone()),
        );
        false
    });

    diagnostics.finish(fixed)
}

fn validate_settings(config: &KitchenConfig, diagnostics: &mut Diagnostics) {
    let gap = config.global_settings.gap_between_modules;
    if !gap.is_finite() || gap < 0.0 {
        diagnostics.error(ValidationIssue::new(
            ValidationIssueKind::InvalidSettings,
            format!("gapBetweenModules must be a non-negative number, got {gap}"),
        ));
    }

    match &config.global_settings.dimensions {
        None => diagnostics.warn(ValidationIssue::new(
            ValidationIssueKind::MissingRoomDimensions,
            "globalSettings.dimensions is not set; centering is unavailable",
        )),
        Some(room) => {
            let extents = [room.side_a, room.side_b, room.height];
            if extents.iter().any(|extent| !extent.is_finite() || *extent <= 0.0) {
                diagnostics.error(ValidationIssue::new(
                    ValidationIssueKind::InvalidSettings,
                    format!(
                        "room dimensions must be positive, got {}×{}×{}",
                        room.side_a, room.side_b, room.height
                    ),
                ));
            }
        }
    }
}

fn validate_line(
    line_idx: usize,
    line: &mut LayoutLine,
    policy: MismatchPolicy,
    gap: f64,
    constraints: &GlobalConstraints,
    library: &ModuleLibrary,
    diagnostics: &mut Diagnostics,
) {
    if !line.direction.is_canonical() {
        diagnostics.warn(
            ValidationIssue::new(
                ValidationIssueKind::UnsupportedDirection,
                format!(
                    "direction {{x: {}, z: {}}} has no dedicated rotation; modules face as on {{x: 1, z: 0}}",
                    line.direction.x, line.direction.z
                ),
            )
            .with_line(line_idx),
        );
    }

    for module in &mut line.modules {
        // Only this pass may produce finalWidth
        module.final_width = None;

        let ModuleWidth::Fixed(width) = module.width else {
            continue;
        };

        if !width.is_finite() {
            diagnostics.error(
                ValidationIssue::new(
                    ValidationIssueKind::InvalidWidth,
                    format!("width {width} is not a finite number"),
                )
                .with_line(line_idx)
                .with_module(module.id.clone()),
            );
            continue;
        }

        let bounds = WidthBounds::for_module(
            module.kind.as_str(),
            module.variant_name(),
            constraints,
            library,
        );
        if let Some(clamped) = bounds.clamp(width) {
            let bound = if clamped > width {
                "below the minimum"
            } else {
                "above the maximum"
            };
            diagnostics.warn(
                ValidationIssue::new(
                    ValidationIssueKind::WidthClamped,
                    format!(
                        "width {width} is {bound} {clamped} ({}); clamped to {clamped}",
                        bounds.source
                    ),
                )
                .with_line(line_idx)
                .with_module(module.id.clone()),
            );
            module.width = ModuleWidth::Fixed(clamped);
        }
    }

    if !line.length.is_finite() || line.length <= 0.0 {
        diagnostics.error(
            ValidationIssue::new(
                ValidationIssueKind::InvalidLine,
                format!("length must be a positive number, got {}", line.length),
            )
            .with_line(line_idx),
        );
        return;
    }

    let total_width: f64 = line
        .modules
        .iter()
        .filter_map(|module| module.width.fixed())
        .sum();
    if total_width <= line.length {
        validate_auto_space(line_idx, line, total_width, gap, diagnostics);
        return;
    }

    let excess = total_width - line.length;
    let overflow_message = format!(
        "modules need {total_width} but the line is {} long (overflow {excess})",
        line.length
    );

    if policy == MismatchPolicy::Error {
        diagnostics.error(
            ValidationIssue::new(ValidationIssueKind::Overflow, overflow_message)
                .with_line(line_idx),
        );
        return;
    }

    diagnostics.warn(
        ValidationIssue::new(ValidationIssueKind::Overflow, overflow_message).with_line(line_idx),
    );

    let auto_count = line
        .modules
        .iter()
        .filter(|module| module.width.is_auto())
        .count();
    if auto_count == 0 {
        diagnostics.error(
            ValidationIssue::new(
                ValidationIssueKind::UnresolvableOverflow,
                "no auto-width modules are available to absorb the overflow",
            )
            .with_line(line_idx),
        );
        return;
    }

    let share = excess / auto_count as f64;
    for module in line.modules.iter_mut().filter(|m| m.width.is_auto()) {
        let nominal = library
            .variant(module.kind.as_str(), module.variant_name())
            .and_then(|variant| variant.default_width)
            .unwrap_or(constraints.modules.min_width);
        let final_width = nominal - share;
        module.final_width = Some(final_width);

        if final_width <= 0.0 {
            diagnostics.error(
                ValidationIssue::new(
                    ValidationIssueKind::UnresolvableOverflow,
                    format!(
                        "shrinking by {share} leaves a width of {final_width} (nominal {nominal})"
                    ),
                )
                .with_line(line_idx)
                .with_module(module.id.clone()),
            );
        }
    }
}

/// Auto modules must keep a positive width once fixed modules and gaps are placed.
fn validate_auto_space(
    line_idx: usize,
    line: &LayoutLine,
    total_width: f64,
    gap: f64,
    diagnostics: &mut Diagnostics,
) {
    let auto_count = line
        .modules
        .iter()
        .filter(|module| module.width.is_auto())
        .count();
    if auto_count == 0 {
        return;
    }

    // An unusable gap is already reported by the settings check
    let gap = if gap.is_finite() && gap > 0.0 { gap } else { 0.0 };
    let total_gaps = line.modules.len().saturating_sub(1) as f64 * gap;
    let remaining = line.length - total_width - total_gaps;
    let auto_width = remaining / auto_count as f64;
    if auto_width > 0.0 {
        return;
    }

    diagnostics.error(
        ValidationIssue::new(
            ValidationIssueKind::UnresolvableOverflow,
            format!(
                "{auto_count} auto-width modules share {remaining} after fixed widths \
                 {total_width} and gaps {total_gaps} on a line of {}",
                line.length
            ),
        )
        .with_line(line_idx),
    );
}

fn validate_unique_ids(config: &KitchenConfig, diagnostics: &mut Diagnostics) {
    let mut seen = HashSet::new();
    let hanging_ids = config
        .hanging_modules
        .iter()
        .map(|hanging| hanging.module().id.as_str());

    for id in config.modules().map(|module| module.id.as_str()).chain(hanging_ids) {
        if !seen.insert(id) {
            diagnostics.warn(
                ValidationIssue::new(
                    ValidationIssueKind::DuplicateModuleId,
                    "id is used more than once; alignment picks the first occurrence",
                )
                .with_module(id),
            );
        }
    }
}

/// Effective width range for one module.
struct WidthBounds {
    min: f64,
    max: f64,
    source: String,
}

impl WidthBounds {
    /// Variant bounds narrowed by the global bounds. When the two ranges do
    /// not overlap the variant wins so that re-validation stays stable.
    fn for_module(
        module_type: &str,
        variant: &str,
        constraints: &GlobalConstraints,
        library: &ModuleLibrary,
    ) -> Self {
        let global = constraints.modules;
        match library.variant(module_type, variant) {
            Some(catalog) => {
                let min = catalog.min_width.max(global.min_width);
                let max = catalog.max_width.min(global.max_width);
                if min <= max {
                    Self {
                        min,
                        max,
                        source: format!("{module_type}/{variant} within global constraints"),
                    }
                } else {
                    Self {
                        min: catalog.min_width,
                        max: catalog.max_width,
                        source: format!("{module_type}/{variant}"),
                    }
                }
            }
            None => Self {
                min: global.min_width,
                max: global.max_width,
                source: "global constraints".to_string(),
            },
        }
    }

    /// Returns the clamped width when `width` lies outside the range.
    fn clamp(&self, width: f64) -> Option<f64> {
        if width < self.min {
            Some(self.min)
        } else if width > self.max {
            Some(self.max)
        } else {
            None
        }
    }
}
