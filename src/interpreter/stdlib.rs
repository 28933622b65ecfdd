//! Native functions installed in the global environment.

use std::{rc::Rc, time::Instant};

use lazy_static::lazy_static;

use crate::{errors::errors::ErrorImpl, lexer::literals::LiteralValue};

use super::{
    environment::EnvRef,
    value::{Callable, NativeFunction, Value},
};

lazy_static! {
    static ref CLOCK_START: Instant = Instant::now();
}

/// Milliseconds elapsed on a monotonic clock.
fn clock(_arguments: &[Value]) -> Result<Value, ErrorImpl> {
    let elapsed = CLOCK_START.elapsed().as_secs_f64() * 1000.0;
    Ok(Value::Literal(LiteralValue::Number(elapsed)))
}

pub fn natives() -> Vec<NativeFunction> {
    vec![NativeFunction {
        name: "clock",
        arity: 0,
        function: clock,
    }]
}

pub fn define_natives(globals: &EnvRef) {
    lazy_static::initialize(&CLOCK_START);

    let mut globals = globals.borrow_mut();
    for native in natives() {
        let name = native.name;
        globals.define_native(name, Value::Callable(Rc::new(Callable::Native(native))));
    }
}
