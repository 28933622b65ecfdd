use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::value::Value;

/// Frames are shared by nested scopes and by every closure that captured
/// them; a write through one handle is seen through all of them.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    pub fn new() -> EnvRef {
        Rc::new(RefCell::new(Environment::default()))
    }

    pub fn new_enclosing(enclosing: EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }))
    }

    pub fn enclosing(&self) -> Option<EnvRef> {
        self.enclosing.as_ref().map(Rc::clone)
    }

    /// Binds a new name in this frame. Rebinding a name in the same frame
    /// is an error.
    pub fn define(&mut self, name: &Token, value: Value) -> Result<(), Error> {
        if self.values.contains_key(&name.lexeme) {
            return Err(Error::at_token(
                ErrorImpl::VariableAlreadyDefined {
                    variable: name.lexeme.clone(),
                },
                name,
            ));
        }

        self.values.insert(name.lexeme.clone(), value);
        Ok(())
    }

    /// Binds a host-provided value, replacing any previous binding.
    pub fn define_native(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &Token) -> Result<Value, Error> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow().get(name),
            None => Err(undefined(name)),
        }
    }

    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), Error> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => Err(undefined(name)),
        }
    }
}

fn undefined(name: &Token) -> Error {
    Error::at_token(
        ErrorImpl::VariableNotDeclared {
            variable: name.lexeme.clone(),
        },
        name,
    )
}

/// Walks `distance` frames outward from `environment`.
pub fn ancestor(environment: &EnvRef, distance: usize) -> Option<EnvRef> {
    let mut current = Rc::clone(environment);

    for _ in 0..distance {
        let next = current.borrow().enclosing()?;
        current = next;
    }

    Some(current)
}

/// Reads `name` from the frame exactly `distance` hops away.
pub fn get_at(environment: &EnvRef, distance: usize, name: &Token) -> Result<Value, Error> {
    let frame = ancestor(environment, distance).ok_or_else(|| undefined(name))?;
    let value = frame.borrow().values.get(&name.lexeme).cloned();
    value.ok_or_else(|| undefined(name))
}

pub fn assign_at(
    environment: &EnvRef,
    distance: usize,
    name: &Token,
    value: Value,
) -> Result<(), Error> {
    let frame = ancestor(environment, distance).ok_or_else(|| undefined(name))?;
    let mut frame = frame.borrow_mut();

    match frame.values.get_mut(&name.lexeme) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(undefined(name)),
    }
}
