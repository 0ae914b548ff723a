use std::collections::HashMap;

use super::value::Value;

type ScopeFrame = HashMap<String, Value>;

/// Manages lexical scoping during evaluation
pub struct Scope {
    frames: Vec<ScopeFrame>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::new()],
        }
    }

    /// A scope whose root frame holds the given bindings; used to run a
    /// closure body inside its captured environment.
    pub fn from_bindings(bindings: ScopeFrame) -> Self {
        Self {
            frames: vec![bindings],
        }
    }

    /// Enter a new scope frame
    pub fn enter(&mut self) {
        self.frames.push(ScopeFrame::new());
    }

    /// Leave the current scope frame
    pub fn leave(&mut self) {
        self.frames.pop();
    }

    /// Resolve a name by searching from innermost to outermost scope
    pub fn resolve(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.contains_key(name))
            .and_then(|frame| frame.get(name))
            .cloned()
    }

    /// Add a binding to the current (innermost) scope
    pub fn add(&mut self, name: impl ToString, value: Value) {
        self.frames
            .last_mut()
            .expect("scope stack should not be empty")
            .insert(name.to_string(), value);
    }

    /// Snapshot every visible binding, inner frames shadowing outer
    /// ones; this is what closures capture at creation time.
    pub fn flatten(&self) -> ScopeFrame {
        let mut bindings = ScopeFrame::new();
        for frame in &self.frames {
            for (name, value) in frame {
                bindings.insert(name.clone(), value.clone());
            }
        }
        bindings
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
