#![allow(dead_code)]

use std::cell::RefCell;

use oxide_ddl_core::{Connection, SqlValue};

/// A prepared statement as seen by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub sql: String,
    pub bindings: Vec<SqlValue>,
}

/// Records every statement it is asked to prepare.
#[derive(Debug, Default)]
pub struct Recorder {
    pub prepared: RefCell<Vec<Prepared>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Prepared {
        self.prepared
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| panic!("nothing was prepared"))
    }
}

impl Connection for Recorder {
    type Statement = Prepared;
    type Error = std::convert::Infallible;

    fn prepare(&self, sql: &str, bindings: Vec<SqlValue>) -> Result<Prepared, Self::Error> {
        let prepared = Prepared {
            sql: sql.to_string(),
            bindings,
        };
        self.prepared.borrow_mut().push(prepared.clone());
        Ok(prepared)
    }
}

/// The error reported by [`Rejecting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError(pub String);

/// Rejects every statement with a fixed diagnostic.
pub struct Rejecting;

impl Connection for Rejecting {
    type Statement = ();
    type Error = EngineError;

    fn prepare(&self, sql: &str, _bindings: Vec<SqlValue>) -> Result<(), EngineError> {
        Err(EngineError(format!("near \"{sql}\": syntax error")))
    }
}

pub fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}
