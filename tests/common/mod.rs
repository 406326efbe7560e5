//! In-memory mock driver shared by the integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use oracle_adapter_rs::driver::{Driver, DriverConnection, DriverCursor, DriverStatement};
use oracle_adapter_rs::{BindType, ConnectOptions, Error, OracleValue, Result, Row};

/// One recorded `Driver::open` call.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCall {
    pub descriptor: String,
    pub username: String,
    pub password: String,
    pub charset: String,
}

/// Shared recording and scripting state for the mock driver.
#[derive(Default)]
pub struct MockState {
    pub opened: Vec<OpenCall>,
    pub executed_sql: Vec<String>,
    pub prepared_sql: Vec<String>,
    pub binds: Vec<(String, OracleValue, BindType)>,
    /// OUT values the "server" writes, keyed by placeholder (`:p2`).
    pub out_values: HashMap<String, OracleValue>,
    /// Rows the ref cursor yields once opened.
    pub cursor_rows: Vec<Row>,
    pub fail_open: Option<(u32, String)>,
    pub fail_execute: Option<(u32, String)>,
    pub fail_cursor: Option<(u32, String)>,
    pub cursor_opened: bool,
    pub closed: bool,
}

#[derive(Clone, Default)]
pub struct MockDriver {
    pub state: Arc<Mutex<MockState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_out_value(self, placeholder: &str, value: OracleValue) -> Self {
        self.state
            .lock()
            .unwrap()
            .out_values
            .insert(placeholder.to_string(), value);
        self
    }

    pub fn with_cursor_rows(self, rows: Vec<Row>) -> Self {
        self.state.lock().unwrap().cursor_rows = rows;
        self
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn open(
        &self,
        descriptor: &str,
        username: &str,
        password: &str,
        options: &ConnectOptions,
    ) -> Result<Box<dyn DriverConnection>> {
        let mut state = self.state.lock().unwrap();
        if let Some((code, message)) = state.fail_open.clone() {
            return Err(Error::driver(code, message));
        }
        state.opened.push(OpenCall {
            descriptor: descriptor.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            charset: options.charset.clone(),
        });
        Ok(Box::new(MockConnection {
            state: Arc::clone(&self.state),
        }))
    }
}

pub struct MockConnection {
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl DriverConnection for MockConnection {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some((code, message)) = state.fail_execute.clone() {
            return Err(Error::driver(code, message));
        }
        state.executed_sql.push(sql.to_string());
        Ok(())
    }

    async fn prepare(&mut self, sql: &str) -> Result<Box<dyn DriverStatement>> {
        self.state.lock().unwrap().prepared_sql.push(sql.to_string());
        Ok(Box::new(MockStatement {
            state: Arc::clone(&self.state),
            cursor_bound: false,
            executed: false,
        }))
    }

    async fn close(&mut self) -> Result<()> {
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}

pub struct MockStatement {
    state: Arc<Mutex<MockState>>,
    cursor_bound: bool,
    executed: bool,
}

#[async_trait]
impl DriverStatement for MockStatement {
    fn bind(&mut self, name: &str, value: &OracleValue, bind_type: &BindType) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .binds
            .push((name.to_string(), value.clone(), bind_type.clone()));
        Ok(())
    }

    fn bind_cursor(&mut self, name: &str) -> Result<()> {
        self.cursor_bound = true;
        self.state
            .lock()
            .unwrap()
            .binds
            .push((name.to_string(), OracleValue::Null, BindType::Cursor));
        Ok(())
    }

    async fn execute(&mut self) -> Result<()> {
        let state = self.state.lock().unwrap();
        if let Some((code, message)) = state.fail_execute.clone() {
            return Err(Error::driver(code, message));
        }
        drop(state);
        self.executed = true;
        Ok(())
    }

    fn out_value(&self, name: &str) -> Option<OracleValue> {
        if !self.executed {
            return None;
        }
        self.state.lock().unwrap().out_values.get(name).cloned()
    }

    fn take_cursor(&mut self) -> Result<Box<dyn DriverCursor>> {
        if !self.cursor_bound {
            return Err(Error::driver(24338, "statement handle not executed"));
        }
        Ok(Box::new(MockCursor {
            state: Arc::clone(&self.state),
            opened: false,
        }))
    }
}

pub struct MockCursor {
    state: Arc<Mutex<MockState>>,
    opened: bool,
}

#[async_trait]
impl DriverCursor for MockCursor {
    async fn execute(&mut self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some((code, message)) = state.fail_cursor.clone() {
            return Err(Error::driver(code, message));
        }
        state.cursor_opened = true;
        drop(state);
        self.opened = true;
        Ok(())
    }

    async fn fetch_all(&mut self) -> Result<Vec<Row>> {
        if !self.opened {
            return Err(Error::driver(24374, "cursor not opened"));
        }
        Ok(self.state.lock().unwrap().cursor_rows.clone())
    }
}
