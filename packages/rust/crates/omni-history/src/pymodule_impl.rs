//! Python bindings for omni-history.

use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::{IgnoreListSource, Turn, normalize_history, pending_user_turn};

/// Python-exposed ignore filter over a fixed ignore list.
#[pyclass]
pub struct PyIgnoreFilter {
    ignored_user_messages: Vec<String>,
}

#[pymethods]
impl PyIgnoreFilter {
    #[new]
    #[pyo3(signature = (ignored_user_messages=Vec::new()))]
    fn new(ignored_user_messages: Vec<String>) -> Self {
        Self {
            ignored_user_messages,
        }
    }

    fn is_ignored(&self, role: &str, content: &str) -> bool {
        self.ignored_user_messages.is_ignored(role, content)
    }

    #[getter]
    fn ignored_user_messages(&self) -> Vec<String> {
        self.ignored_user_messages.clone()
    }
}

/// Merge consecutive assistant messages in a list of `{"role", "content"}` dicts.
///
/// The pending message is appended only when `include_pending` is true and both
/// `pending_role` and `pending_content` are given.
#[pyfunction]
#[pyo3(signature = (history, pending_role=None, pending_content=None, include_pending=false))]
pub fn normalize_history_py(
    py: Python<'_>,
    history: Vec<Bound<'_, PyDict>>,
    pending_role: Option<String>,
    pending_content: Option<String>,
    include_pending: bool,
) -> PyResult<Py<PyAny>> {
    let turns = history
        .iter()
        .map(turn_from_dict)
        .collect::<PyResult<Vec<_>>>()?;
    let pending = pending_user_turn(include_pending, pending_role, pending_content);

    let list = PyList::empty(py);
    for turn in normalize_history(&turns, pending.as_ref()) {
        let dict = PyDict::new(py);
        dict.set_item("role", turn.role)?;
        dict.set_item("content", turn.content)?;
        list.append(dict)?;
    }
    Ok(list.into())
}

fn turn_from_dict(entry: &Bound<'_, PyDict>) -> PyResult<Turn> {
    let field = |key: &str| -> PyResult<String> {
        entry
            .get_item(key)?
            .ok_or_else(|| PyKeyError::new_err(key.to_string()))?
            .extract::<String>()
            .map_err(Into::into)
    };
    Ok(Turn::new(field("role")?, field("content")?))
}
