use crate::conversion::{Converter, output_file_name};
use crate::document::detect_platform as detect;
use crate::platform::Platform;
use crate::registry::AppRegistry;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn parse_platform(tag: &str) -> PyResult<Platform> {
    tag.parse::<Platform>().map_err(value_error)
}

/// A workflow converter for Zapier, n8n and Make exports.
///
/// The app registry is built once on initialization, so an instance can
/// convert any number of workflows without rebuilding its lookup tables.
#[pyclass(name = "Flowport")]
struct FlowportPy {
    registry: AppRegistry,
}

#[pymethods]
impl FlowportPy {
    /// Initializes the converter.
    ///
    /// Args:
    ///     mappings_json (str | None): Extra capability mappings shaped like
    ///         `{"<capability>": {"zapier": "...", "n8n": "...", "make": "..."}}`.
    ///         Rows with a built-in capability name replace the built-in row.
    ///
    /// Returns:
    ///     Flowport: A converter using the built-in app table plus any extra
    ///         mappings.
    ///
    /// Raises:
    ///     ValueError: If `mappings_json` is malformed or a capability name is
    ///         empty after normalization.
    #[new]
    #[pyo3(signature = (mappings_json=None))]
    fn new(mappings_json: Option<&str>) -> PyResult<Self> {
        let registry = match mappings_json {
            Some(json) => AppRegistry::from_json(json).map_err(value_error)?,
            None => AppRegistry::global().clone(),
        };
        Ok(FlowportPy { registry })
    }

    /// Converts a workflow export between platforms.
    ///
    /// Steps whose app has no equivalent on the target platform are left out
    /// and reported in the validation warnings; conversion itself never fails
    /// on document content.
    ///
    /// Args:
    ///     source_json (str): The exported workflow as JSON text.
    ///     source (str): The platform that produced it: "zapier", "n8n" or "make".
    ///     target (str): The platform to convert to.
    ///
    /// Returns:
    ///     str: JSON text of the conversion result, with the keys "platform",
    ///         "workflow" and "validation" ("success", "warnings",
    ///         "mappedSteps", "unmappedSteps").
    ///
    /// Raises:
    ///     ValueError: If `source_json` is not JSON or a platform tag is unknown.
    fn convert(&self, source_json: &str, source: &str, target: &str) -> PyResult<String> {
        let from = parse_platform(source)?;
        let to = parse_platform(target)?;
        let value: serde_json::Value = serde_json::from_str(source_json).map_err(value_error)?;
        let result = Converter::new(&self.registry).convert(&value, from, to);
        serde_json::to_string(&result).map_err(value_error)
    }
}

/// Guesses which platform exported a workflow.
///
/// Returns:
///     str: "zapier", "n8n" or "make".
///
/// Raises:
///     ValueError: If the JSON is invalid or its format is not recognised.
#[pyfunction]
fn detect_platform(source_json: &str) -> PyResult<String> {
    let value: serde_json::Value = serde_json::from_str(source_json).map_err(value_error)?;
    detect(&value)
        .map(|platform| platform.to_string())
        .map_err(value_error)
}

/// The download file name for a converted workflow, e.g. "sync_leads_n8n.json".
#[pyfunction(name = "output_file_name")]
fn output_file_name_py(workflow_name: &str, target: &str) -> PyResult<String> {
    Ok(output_file_name(workflow_name, parse_platform(target)?))
}

/// Converts workflow-automation exports between Zapier, n8n and Make.
///
/// This module provides Python bindings to the flowport Rust library.
#[pymodule]
fn flowport(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FlowportPy>()?;
    m.add_function(wrap_pyfunction!(detect_platform, m)?)?;
    m.add_function(wrap_pyfunction!(output_file_name_py, m)?)?;
    Ok(())
}
