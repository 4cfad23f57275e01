//! Response projections.
//!
//! Every response shape is written out by hand, so nested entities are
//! rendered flat and relationship graphs can never recurse. Callers narrow a
//! projection further with [`Rules`], which take dotted paths such as
//! `"production.title"`.

use serde_json::{Map, Value, json};

use crate::entities::{actor, cast_member, production, user};

#[derive(Clone, Copy, Debug, Default)]
pub struct Rules<'a> {
    only: &'a [&'a str],
    exclude: &'a [&'a str],
}

impl<'a> Rules<'a> {
    pub const fn only(fields: &'a [&'a str]) -> Self {
        Self { only: fields, exclude: &[] }
    }

    pub const fn exclude(fields: &'a [&'a str]) -> Self {
        Self { only: &[], exclude: fields }
    }

    /// `only` narrows first, then `exclude` removes from what is left.
    pub fn apply(&self, value: Value) -> Value {
        let value = if self.only.is_empty() { value } else { keep_only(value, self.only) };
        if self.exclude.is_empty() { value } else { drop_excluded(value, self.exclude) }
    }
}

fn keep_only(value: Value, paths: &[&str]) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| keep_only(item, paths)).collect())
        },
        Value::Object(fields) => {
            let mut out = Map::new();
            for (key, field) in fields {
                let mut whole = false;
                let mut nested = Vec::new();
                for path in paths {
                    match path.split_once('.') {
                        Some((head, rest)) if head == key => nested.push(rest),
                        None if *path == key => whole = true,
                        _ => {},
                    }
                }
                if whole {
                    out.insert(key, field);
                } else if !nested.is_empty() {
                    out.insert(key, keep_only(field, &nested));
                }
            }
            Value::Object(out)
        },
        other => other,
    }
}

fn drop_excluded(value: Value, paths: &[&str]) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| drop_excluded(item, paths)).collect())
        },
        Value::Object(fields) => {
            let mut out = Map::new();
            for (key, field) in fields {
                let mut dropped = false;
                let mut nested = Vec::new();
                for path in paths {
                    match path.split_once('.') {
                        Some((head, rest)) if head == key => nested.push(rest),
                        None if *path == key => dropped = true,
                        _ => {},
                    }
                }
                if dropped {
                    continue;
                }
                let field = if nested.is_empty() { field } else { drop_excluded(field, &nested) };
                out.insert(key, field);
            }
            Value::Object(out)
        },
        other => other,
    }
}

fn timestamp(seconds: i64) -> Value {
    jiff::Timestamp::from_second(seconds)
        .map(|ts| Value::String(ts.to_string()))
        .unwrap_or(Value::Null)
}

pub fn production(p: &production::Model) -> Value {
    json!({
        "id": p.id,
        "title": p.title,
        "genre": p.genre,
        "budget": p.budget,
        "image": p.image,
        "director": p.director,
        "description": p.description,
        "ongoing": p.ongoing,
        "created_at": timestamp(p.created_at),
        "updated_at": p.updated_at.map(timestamp),
    })
}

pub fn actor(a: &actor::Model) -> Value {
    json!({
        "id": a.id,
        "name": a.name,
        "email": a.email,
        "created_at": timestamp(a.created_at),
        "updated_at": a.updated_at.map(timestamp),
    })
}

pub fn cast_member(c: &cast_member::Model) -> Value {
    json!({
        "id": c.id,
        "name": c.name,
        "role": c.role,
        "production_id": c.production_id,
        "actor_id": c.actor_id,
        "created_at": timestamp(c.created_at),
        "updated_at": c.updated_at.map(timestamp),
    })
}

pub fn user(u: &user::Model) -> Value {
    json!({
        "id": u.id,
        "name": u.name,
        "email": u.email,
        "created_at": timestamp(u.created_at),
        "updated_at": u.updated_at.map(timestamp),
    })
}

pub fn production_with_cast(
    p: &production::Model,
    cast: &[cast_member::Model],
    actors: &[actor::Model],
) -> Value {
    let mut out = production(p);
    out["cast_members"] = cast.iter().map(cast_member).collect();
    out["actors"] = actors.iter().map(actor).collect();
    out
}

pub fn actor_with_roles(
    a: &actor::Model,
    cast: &[cast_member::Model],
    productions: &[production::Model],
) -> Value {
    let mut out = actor(a);
    out["cast_members"] = cast.iter().map(cast_member).collect();
    out["productions"] = productions.iter().map(production).collect();
    out
}

pub fn cast_member_with_links(
    c: &cast_member::Model,
    p: Option<&production::Model>,
    a: Option<&actor::Model>,
) -> Value {
    let mut out = cast_member(c);
    out["production"] = p.map(production).unwrap_or(Value::Null);
    out["actor"] = a.map(actor).unwrap_or(Value::Null);
    out
}
