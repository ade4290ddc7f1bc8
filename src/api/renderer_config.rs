use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PRECISION, FillType, GradientPaintTransformer, LegendShape};
use crate::error::{ChartError, ChartResult};

pub const RENDERER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Value object parametrizing a spline render pass.
///
/// Equality and hashing are structural over every field, so two configs built
/// independently with the same settings are interchangeable as map keys.
/// `clone` is a deep copy: legend polygons own their vertices. Every
/// deserialization path runs [`SplineRendererConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConfigFields")]
pub struct SplineRendererConfig {
    precision: usize,
    fill_type: FillType,
    gradient_transformer: Option<GradientPaintTransformer>,
    legend_shape: Option<LegendShape>,
}

// Wire shape of a config; optional fields fall back to the defaults.
#[derive(Deserialize)]
struct ConfigFields {
    precision: usize,
    #[serde(default)]
    fill_type: FillType,
    #[serde(default = "default_gradient_transformer")]
    gradient_transformer: Option<GradientPaintTransformer>,
    #[serde(default = "default_legend_shape")]
    legend_shape: Option<LegendShape>,
}

impl TryFrom<ConfigFields> for SplineRendererConfig {
    type Error = ChartError;

    fn try_from(fields: ConfigFields) -> ChartResult<Self> {
        let config = Self {
            precision: fields.precision,
            fill_type: fields.fill_type,
            gradient_transformer: fields.gradient_transformer,
            legend_shape: fields.legend_shape,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Deserialize)]
struct ContractFields {
    schema_version: u32,
    config: ConfigFields,
}

impl Default for SplineRendererConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            fill_type: FillType::None,
            gradient_transformer: default_gradient_transformer(),
            legend_shape: default_legend_shape(),
        }
    }
}

impl SplineRendererConfig {
    /// Default config with an explicit precision.
    pub fn new(precision: usize) -> ChartResult<Self> {
        Self::default().with_precision(precision)
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: usize) -> ChartResult<()> {
        self.precision = validate_precision(precision)?;
        Ok(())
    }

    pub fn with_precision(mut self, precision: usize) -> ChartResult<Self> {
        self.set_precision(precision)?;
        Ok(self)
    }

    #[must_use]
    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) {
        self.fill_type = fill_type;
    }

    #[must_use]
    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }

    #[must_use]
    pub fn gradient_transformer(&self) -> Option<GradientPaintTransformer> {
        self.gradient_transformer
    }

    pub fn set_gradient_transformer(&mut self, transformer: Option<GradientPaintTransformer>) {
        self.gradient_transformer = transformer;
    }

    #[must_use]
    pub fn with_gradient_transformer(
        mut self,
        transformer: Option<GradientPaintTransformer>,
    ) -> Self {
        self.gradient_transformer = transformer;
        self
    }

    #[must_use]
    pub fn legend_shape(&self) -> Option<&LegendShape> {
        self.legend_shape.as_ref()
    }

    /// Mutable access to this config's own copy of the legend shape.
    pub fn legend_shape_mut(&mut self) -> Option<&mut LegendShape> {
        self.legend_shape.as_mut()
    }

    pub fn set_legend_shape(&mut self, shape: Option<LegendShape>) -> ChartResult<()> {
        if let Some(shape) = &shape {
            shape.validate()?;
        }
        self.legend_shape = shape;
        Ok(())
    }

    pub fn with_legend_shape(mut self, shape: Option<LegendShape>) -> ChartResult<Self> {
        self.set_legend_shape(shape)?;
        Ok(self)
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_precision(self.precision)?;
        if let Some(shape) = &self.legend_shape {
            shape.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Persistence(format!("failed to serialize renderer config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SplineRendererConfigJsonContractV1 {
            schema_version: RENDERER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Persistence(format!(
                "failed to serialize renderer config contract v1: {e}"
            ))
        })
    }

    /// Restores a config from either a bare payload or a v1 contract.
    ///
    /// Malformed JSON is a `Persistence` error; a well-formed payload with
    /// invalid settings reports the validation error itself.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let fields = match serde_json::from_str::<ConfigFields>(input) {
            Ok(fields) => fields,
            Err(_) => {
                let payload: ContractFields = serde_json::from_str(input).map_err(|e| {
                    ChartError::Persistence(format!(
                        "failed to parse renderer config json payload: {e}"
                    ))
                })?;
                if payload.schema_version != RENDERER_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::Persistence(format!(
                        "unsupported renderer config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        Self::try_from(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineRendererConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: SplineRendererConfig,
}

fn validate_precision(precision: usize) -> ChartResult<usize> {
    if precision == 0 {
        return Err(ChartError::InvalidPrecision { precision });
    }
    Ok(precision)
}

fn default_gradient_transformer() -> Option<GradientPaintTransformer> {
    Some(GradientPaintTransformer::Vertical)
}

fn default_legend_shape() -> Option<LegendShape> {
    Some(LegendShape::default())
}
