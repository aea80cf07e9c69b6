// ABOUTME: Value types representing NaturalLanguage data and function objects

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A user-defined function.
///
/// Shared and mutated in place via `Rc<RefCell<_>>`: `with function ...`
/// constructs one, indented lines append statements to `body` while it is
/// being loaded, a later `with <args>` call site mutates `values`, and `Run`
/// reads the result. All four steps operate on the same object identity.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    pub params: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub values: Vec<Value>,
    /// Diagnostic label only — the name the function was last looked up
    /// under. Never read by arity checks, invocation, or display.
    pub name: Option<String>,
}

impl FunctionData {
    pub fn new(params: Vec<String>) -> Self {
        FunctionData {
            params,
            body: Vec::new(),
            values: Vec::new(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    /// An identifier token that survived literal resolution unbound, or the
    /// evaluated form of any bare word the language doesn't otherwise typecheck.
    Word(String),
    List(Vec<Value>),
    Function(Rc<RefCell<FunctionData>>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Word(_) => "word",
            Value::List(_) => "list",
            Value::Function(_) => "function",
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Value::Word(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug formatting of f64 always carries a decimal point (5.0,
            // not 5), matching the source language's float-everywhere model.
            Value::Number(n) => write!(f, "{:?}", n),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Word(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Function(func) => {
                let func = func.borrow();
                match &func.name {
                    Some(name) => write!(f, "<function {}>", name),
                    None => write!(f, "<function>"),
                }
            }
        }
    }
}
