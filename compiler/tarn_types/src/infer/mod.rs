//! Constraint generation.
//!
//! Walks the expression tree once, returning each sub-term's type and the
//! constraints it depends on. Let bindings are the exception to pure
//! generation: the bound value's constraints are solved on the spot so its
//! principal type can be generalized before the body is inferred.

use tarn_ir::{ExprArena, ExprId, ExprKind, Name, Param, ParsedType, StringInterner};

use crate::unify::{unify, Constraint};
use crate::{generalize, BuiltinTypes, Type, TypeContext, TypeError, TypeErrorKind, TypeVarGen};

/// A term's type together with the constraints it relies on.
pub type Inferred = (Type, Vec<Constraint>);

/// One inference session over an expression arena.
pub struct InferEngine<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    builtins: &'a dyn BuiltinTypes,
    vars: TypeVarGen,
}

impl<'a> InferEngine<'a> {
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        builtins: &'a dyn BuiltinTypes,
    ) -> Self {
        InferEngine {
            arena,
            interner,
            builtins,
            vars: TypeVarGen::new(),
        }
    }

    #[inline]
    pub fn vars_mut(&mut self) -> &mut TypeVarGen {
        &mut self.vars
    }

    pub fn infer(&mut self, ctx: &TypeContext<'_>, id: ExprId) -> Result<Inferred, TypeError> {
        let arena = self.arena;
        let span = arena.span(id);
        match arena.kind(id) {
            ExprKind::Bool(_) => Ok((Type::Bool, Vec::new())),
            ExprKind::Int(_) => Ok((Type::Int, Vec::new())),
            ExprKind::Str(_) => Ok((Type::Str, Vec::new())),

            ExprKind::Var(name) => {
                let ty = match ctx.lookup(*name) {
                    Some(ty) => ty.clone(),
                    None => self
                        .builtins
                        .builtin_type(*name, &mut self.vars)
                        .ok_or_else(|| {
                            TypeError::new(
                                TypeErrorKind::UnboundVariable {
                                    name: self.interner.lookup(*name).to_owned(),
                                },
                                span,
                            )
                        })?,
                };
                match ty {
                    // A use site gets its own variable; unification instantiates
                    // the scheme when it binds it, so schemes never nest inside
                    // another type.
                    scheme @ Type::Scheme(_) => {
                        let use_ty = self.vars.fresh_type();
                        Ok((use_ty.clone(), vec![Constraint::new(scheme, use_ty, span)]))
                    }
                    ty => Ok((ty, Vec::new())),
                }
            }

            ExprKind::Empty => Ok((Type::list(self.vars.fresh_type()), Vec::new())),

            ExprKind::Cons { car, cdr } => {
                let (car_ty, car_cs) = self.infer(ctx, *car)?;
                let (cdr_ty, cdr_cs) = self.infer(ctx, *cdr)?;
                let list_ty = Type::list(car_ty);
                let mut cs = vec![Constraint::new(
                    list_ty.clone(),
                    cdr_ty,
                    self.arena.span(*cdr),
                )];
                cs.extend(car_cs);
                cs.extend(cdr_cs);
                Ok((list_ty, cs))
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let (cond_ty, cond_cs) = self.infer(ctx, *cond)?;
                let (then_ty, then_cs) = self.infer(ctx, *then_branch)?;
                let (else_ty, else_cs) = self.infer(ctx, *else_branch)?;
                let mut cs = vec![
                    Constraint::new(Type::Bool, cond_ty, self.arena.span(*cond)),
                    Constraint::new(then_ty.clone(), else_ty, self.arena.span(*else_branch)),
                ];
                cs.extend(cond_cs);
                cs.extend(then_cs);
                cs.extend(else_cs);
                Ok((then_ty, cs))
            }

            ExprKind::Let { name, value, body } => self.infer_let(ctx, *name, *value, *body),

            ExprKind::Lambda { params, body } => {
                let bindings = params
                    .iter()
                    .map(|param| -> Result<(Name, Type), TypeError> {
                        Ok((param.name, self.param_type(param)?))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let param_tys = bindings.iter().map(|(_, ty)| ty.clone()).collect();
                let inner = ctx.extend(bindings);
                let (body_ty, body_cs) = self.infer(&inner, *body)?;
                Ok((Type::arrow(param_tys, body_ty), body_cs))
            }

            ExprKind::Call { func, args } => {
                let (func_ty, func_cs) = self.infer(ctx, *func)?;
                let mut arg_tys = Vec::with_capacity(args.len());
                let mut arg_cs = Vec::new();
                for arg in args {
                    let (ty, cs) = self.infer(ctx, *arg)?;
                    arg_tys.push(ty);
                    arg_cs.extend(cs);
                }
                let ret = self.vars.fresh_type();
                let mut cs = vec![Constraint::new(
                    func_ty,
                    Type::arrow(arg_tys, ret.clone()),
                    span,
                )];
                cs.extend(func_cs);
                cs.extend(arg_cs);
                Ok((ret, cs))
            }
        }
    }

    /// Infer `(let name value body)` with let-polymorphism.
    ///
    /// `name` is visible inside `value` at a single monomorphic type, then
    /// generalized over every variable the enclosing context does not
    /// mention before `body` sees it.
    fn infer_let(
        &mut self,
        ctx: &TypeContext<'_>,
        name: Name,
        value: ExprId,
        body: ExprId,
    ) -> Result<Inferred, TypeError> {
        let value_span = self.arena.span(value);
        let recursive = self.vars.fresh_type();

        let rec_ctx = ctx.bind(name, recursive.clone());
        let (value_ty, value_cs) = self.infer(&rec_ctx, value)?;

        let mut local = Vec::with_capacity(value_cs.len() + 1);
        local.push(Constraint::new(recursive.clone(), value_ty.clone(), value_span));
        local.extend(value_cs.iter().cloned());
        let subst = unify(local, &mut self.vars)?;

        let principal = subst.apply(&value_ty);
        let env_vars = ctx.free_vars_under(&subst);
        let scheme = generalize(principal.clone(), &env_vars);
        tracing::trace!(
            name = self.interner.lookup(name),
            quantified = matches!(scheme, Type::Scheme(_)),
            "generalized let binding"
        );

        let body_ctx = ctx.bind(name, scheme);
        let (body_ty, body_cs) = self.infer(&body_ctx, body)?;

        let mut cs = Vec::with_capacity(1 + body_cs.len() + value_cs.len());
        cs.push(Constraint::new(recursive, principal, value_span));
        cs.extend(body_cs);
        cs.extend(value_cs);
        Ok((body_ty, cs))
    }

    fn param_type(&mut self, param: &Param) -> Result<Type, TypeError> {
        match &param.ty {
            Some(annotation) => self.annotation_type(annotation, param),
            None => Ok(self.vars.fresh_type()),
        }
    }

    fn annotation_type(&self, annotation: &ParsedType, param: &Param) -> Result<Type, TypeError> {
        Ok(match annotation {
            ParsedType::Bool => Type::Bool,
            ParsedType::Int => Type::Int,
            ParsedType::Str => Type::Str,
            ParsedType::List(elem) => Type::list(self.annotation_type(elem, param)?),
            ParsedType::Arrow { params, ret } => Type::arrow(
                params
                    .iter()
                    .map(|p| self.annotation_type(p, param))
                    .collect::<Result<_, _>>()?,
                self.annotation_type(ret, param)?,
            ),
            ParsedType::Named(name) => {
                return Err(TypeError::new(
                    TypeErrorKind::UnknownTypeAnnotation {
                        name: self.interner.lookup(*name).to_owned(),
                    },
                    param.span,
                ))
            }
        })
    }
}
