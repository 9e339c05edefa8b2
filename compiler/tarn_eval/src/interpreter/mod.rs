//! Tree-walking interpreter.
//!
//! Evaluation is strict and left to right. Programs are assumed to have
//! passed type checking, so only the shape checks needed to dispatch are
//! performed, and failing one is an internal error.

use std::rc::Rc;

use tarn_ir::{ExprArena, ExprId, ExprKind, Name, StringInterner};

use crate::{Closure, Environment, EvalError, EvalErrorKind, FrameId, Stdlib, Value};

/// Interpreter state for one program.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    stdlib: &'a Stdlib,
    env: Environment,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, stdlib: &'a Stdlib) -> Self {
        Interpreter {
            arena,
            interner,
            stdlib,
            env: Environment::new(),
        }
    }

    /// Frames allocated so far.
    pub fn frame_count(&self) -> usize {
        self.env.len()
    }

    /// Evaluate `id` in the environment `env` (`None` is the root).
    pub fn eval(&mut self, id: ExprId, env: Option<FrameId>) -> Result<Value, EvalError> {
        let arena = self.arena;
        let span = arena.span(id);
        match arena.kind(id) {
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Str(s) => Ok(Value::string(self.interner.lookup(*s))),
            ExprKind::Empty => Ok(Value::Empty),

            ExprKind::Var(name) => self
                .env
                .lookup(env, *name)
                .cloned()
                .or_else(|| self.stdlib.value(*name))
                .ok_or_else(|| {
                    EvalError::new(
                        EvalErrorKind::UnboundVariable {
                            name: self.interner.lookup(*name).to_owned(),
                        },
                        span,
                    )
                }),

            ExprKind::Cons { car, cdr } => {
                let car = self.eval(*car, env)?;
                let cdr = self.eval(*cdr, env)?;
                Ok(Value::cons(car, cdr))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(*cond, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => Err(EvalError::new(
                    EvalErrorKind::NonBooleanCondition {
                        found: other.type_name(),
                    },
                    arena.span(*cond),
                )),
            },

            ExprKind::Lambda { params, body } => Ok(Value::Closure(Rc::new(Closure {
                params: params.iter().map(|p| p.name).collect(),
                body: *body,
                env,
            }))),

            ExprKind::Let { name, value, body } => {
                let body_env = self.bind_let(*name, *value, env)?;
                self.eval(*body, Some(body_env))
            }

            ExprKind::Call { func, args } => {
                let callee = self.eval(*func, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(*arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                match callee {
                    Value::Closure(closure) => self.apply_closure(&closure, args),
                    Value::Builtin(builtin) => {
                        tracing::trace!(builtin = builtin.name(), "call builtin");
                        builtin.call(&args).map_err(|kind| EvalError::new(kind, span))
                    }
                    other => Err(EvalError::new(
                        EvalErrorKind::CalledNonFunction {
                            found: other.type_name(),
                        },
                        arena.span(*func),
                    )),
                }
            }
        }
    }

    /// Evaluate a let-bound value and return the frame binding it.
    ///
    /// A lambda literal gets a closure whose captured environment is the
    /// very frame that binds it, so the body can call itself by name. Any
    /// other value is evaluated without its own name in scope.
    fn bind_let(
        &mut self,
        name: Name,
        value: ExprId,
        env: Option<FrameId>,
    ) -> Result<FrameId, EvalError> {
        let arena = self.arena;
        if let ExprKind::Lambda { params, body } = arena.kind(value) {
            let params: Vec<Name> = params.iter().map(|p| p.name).collect();
            let body = *body;
            return Ok(self.env.push_recursive(name, env, |frame| {
                Value::Closure(Rc::new(Closure {
                    params,
                    body,
                    env: Some(frame),
                }))
            }));
        }
        let value = self.eval(value, env)?;
        Ok(self.env.push(name, value, env))
    }

    /// Bind arguments onto the closure's captured environment and run it.
    ///
    /// Parameters are pushed last to first so the first one is innermost;
    /// with a repeated name the first parameter wins, as in type checking.
    fn apply_closure(&mut self, closure: &Closure, args: Vec<Value>) -> Result<Value, EvalError> {
        let mut frame = closure.env;
        for (param, arg) in closure.params.iter().zip(args).rev() {
            frame = Some(self.env.push(*param, arg, frame));
        }
        self.eval(closure.body, frame)
    }
}
