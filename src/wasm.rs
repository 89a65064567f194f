//! WASM bindings for Eqsys Core.
//!
//! This module provides JavaScript-friendly bindings for solving equation
//! systems typed into a web form.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmEquationSystem } from 'eqsys_core';
//!
//! await init();
//!
//! const system = new WasmEquationSystem(`
//!   b = 1/2a + 3/4
//!   a = 7/5
//! `);
//!
//! system.solution();         // "a = 7/5, b = 29/20"
//! system.decimal(2);         // "a = 1.4, b = 1.45"
//! system.markup();           // "<var>a</var> = ..."
//! system.is_approximation(); // false
//! ```

use wasm_bindgen::prelude::*;

use crate::error::EqsysError;
use crate::value::{Notation, Solution};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A solved equation system.
#[wasm_bindgen]
pub struct WasmEquationSystem {
    solution: Solution,
}

#[wasm_bindgen]
impl WasmEquationSystem {
    /// Solve a block of equations, one per line.
    ///
    /// # Returns
    /// The solved system, or an error string if it cannot be solved.
    #[wasm_bindgen(constructor)]
    pub fn new(equations: &str) -> Result<WasmEquationSystem, JsValue> {
        let solution = crate::solve_text(equations).map_err(to_js_error)?;
        Ok(Self { solution })
    }

    /// Exact rendering, e.g. `x = 3/2, y = 1/2 + z`.
    #[wasm_bindgen]
    pub fn solution(&self) -> String {
        self.solution.render(Notation::Rational)
    }

    /// Decimal rendering rounded to `precision` digits.
    #[wasm_bindgen]
    pub fn decimal(&self, precision: usize) -> String {
        self.solution.render(Notation::Decimal { precision })
    }

    /// HTML rendering with `<var>` names and fraction spans.
    #[wasm_bindgen]
    pub fn markup(&self) -> String {
        self.solution.to_markup(Notation::Rational)
    }

    /// Whether the result is a least-squares approximation.
    #[wasm_bindgen]
    pub fn is_approximation(&self) -> bool {
        self.solution.is_approximation()
    }

    /// Names of the unknowns, in output order.
    #[wasm_bindgen]
    pub fn variables(&self) -> Vec<String> {
        self.solution
            .iter()
            .map(|value| value.name().to_string())
            .collect()
    }
}

fn to_js_error(err: EqsysError) -> JsValue {
    let err = EqsysError::WasmError {
        message: err.to_string(),
    };
    JsValue::from_str(&err.to_string())
}
