use crate::builtin::builtins;
use crate::eval::EvalErr;
use crate::value::Value;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One frame of the lexical scope chain. Frames are shared: a closure keeps
/// its defining frame alive and sees later mutations made through it.
pub struct Env {
    syms: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Env>>,
}

impl Env {
    /// Global frame with the builtin library installed.
    pub fn root() -> Rc<Env> {
        Rc::new(Env { syms: RefCell::new(builtins()), outer: None })
    }

    pub fn empty() -> Rc<Env> {
        Rc::new(Env { syms: RefCell::new(HashMap::new()), outer: None })
    }

    pub fn child(outer: &Rc<Env>) -> Rc<Env> {
        Rc::new(Env { syms: RefCell::new(HashMap::new()), outer: Some(outer.clone()) })
    }

    pub fn nested(params: Vec<String>, args: Vec<Value>, outer: Rc<Env>) -> Env {
        Env {
            syms: RefCell::new(params.into_iter().zip(args).collect()),
            outer: Some(outer),
        }
    }

    pub fn is_root(&self) -> bool {
        self.outer.is_none()
    }

    /// Whether this frame itself (not an outer one) binds `sym`.
    pub fn contains(&self, sym: &str) -> bool {
        self.syms.borrow().contains_key(sym)
    }

    // innermost frame that binds sym
    pub fn find(&self, sym: &str) -> Option<&Env> {
        if self.contains(sym) {
            Some(self)
        } else if let Some(ref otx) = self.outer {
            otx.find(sym)
        } else {
            None
        }
    }

    pub fn get(&self, sym: &str) -> Result<Value, EvalErr> {
        self.find(sym)
            .and_then(|cx| cx.syms.borrow().get(sym).cloned())
            .ok_or_else(|| EvalErr::Unbound(sym.to_string()))
    }

    /// Bind in this frame, shadowing any outer binding of the same name.
    pub fn define(&self, sym: String, value: Value) {
        self.syms.borrow_mut().insert(sym, value);
    }

    /// Overwrite the nearest existing binding, never creates one.
    pub fn set(&self, sym: &str, value: Value) -> Result<(), EvalErr> {
        match self.find(sym) {
            Some(cx) => {
                cx.syms.borrow_mut().insert(sym.to_string(), value);
                Ok(())
            }
            None => Err(EvalErr::Unbound(sym.to_string())),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
