use sea_orm::Set;
use serde::Deserialize;

use crate::{
    entities::{actor, cast_member, production, user},
    validation::{self, ValidationResult},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProduction {
    pub title: String,
    pub genre: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub budget: Option<f64>,
    pub image: Option<String>,
    pub director: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub ongoing: Option<bool>,
}

impl NewProduction {
    pub fn into_active_model(self, now: i64) -> ValidationResult<production::ActiveModel> {
        Ok(production::ActiveModel {
            id: Default::default(),
            title: Set(validation::required("title", self.title)?),
            genre: Set(validation::required("genre", self.genre)?),
            budget: Set(self.budget),
            image: Set(self.image.map(validation::image).transpose()?),
            director: Set(self.director),
            description: Set(self.description),
            ongoing: Set(self.ongoing.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(None),
        })
    }
}

/// Partial update: absent keys are left alone, explicit `null` clears optional columns.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductionChanges {
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub genre: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable_number")]
    pub budget: Option<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub director: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable_flag")]
    pub ongoing: Option<Option<bool>>,
}

impl ProductionChanges {
    pub fn apply(self, model: &mut production::ActiveModel) -> ValidationResult<()> {
        if let Some(title) = self.title {
            model.title = Set(validation::required_present("title", title)?);
        }
        if let Some(genre) = self.genre {
            model.genre = Set(validation::required_present("genre", genre)?);
        }
        if let Some(budget) = self.budget {
            model.budget = Set(budget);
        }
        if let Some(image) = self.image {
            model.image = Set(image.map(validation::image).transpose()?);
        }
        if let Some(director) = self.director {
            model.director = Set(director);
        }
        if let Some(description) = self.description {
            model.description = Set(description);
        }
        if let Some(ongoing) = self.ongoing {
            let ongoing = ongoing
                .ok_or_else(|| validation::ValidationError::new("ongoing", "ongoing is required"))?;
            model.ongoing = Set(ongoing);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewActor {
    pub name: String,
    pub email: Option<String>,
}

impl NewActor {
    pub fn into_active_model(self, now: i64) -> ValidationResult<actor::ActiveModel> {
        Ok(actor::ActiveModel {
            id: Default::default(),
            name: Set(validation::required("name", self.name)?),
            email: Set(self.email),
            created_at: Set(now),
            updated_at: Set(None),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorChanges {
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub email: Option<Option<String>>,
}

impl ActorChanges {
    pub fn apply(self, model: &mut actor::ActiveModel) -> ValidationResult<()> {
        if let Some(name) = self.name {
            model.name = Set(validation::required_present("name", name)?);
        }
        if let Some(email) = self.email {
            model.email = Set(email);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCastMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub production_id: i32,
    pub actor_id: i32,
}

impl NewCastMember {
    pub fn into_active_model(self, now: i64) -> cast_member::ActiveModel {
        cast_member::ActiveModel {
            id: Default::default(),
            name: Set(self.name),
            role: Set(self.role),
            production_id: Set(self.production_id),
            actor_id: Set(self.actor_id),
            created_at: Set(now),
            updated_at: Set(None),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CastMemberChanges {
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::nullable")]
    pub role: Option<Option<String>>,
}

impl CastMemberChanges {
    pub fn apply(self, model: &mut cast_member::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(role) = self.role {
            model.role = Set(role);
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

impl NewUser {
    pub fn into_active_model(self, now: i64) -> ValidationResult<user::ActiveModel> {
        Ok(user::ActiveModel {
            id: Default::default(),
            name: Set(validation::required("name", self.name)?),
            email: Set(self.email),
            created_at: Set(now),
            updated_at: Set(None),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
}

/// Form clients send numbers and flags as strings; accept both shapes.
mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            None => Ok(None),
            Some(Loose::Int(n)) => Ok(Some(n as f64)),
            Some(Loose::Float(n)) => Ok(Some(n)),
            Some(Loose::Text(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid number: {s:?}"))),
            Some(Loose::Bool(_)) => Err(D::Error::custom("expected a number, found a boolean")),
        }
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        match Option::<Loose>::deserialize(d)? {
            None => Ok(None),
            Some(Loose::Bool(b)) => Ok(Some(b)),
            Some(Loose::Int(n)) => Ok(Some(n != 0)),
            Some(Loose::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(D::Error::custom(format!("invalid boolean: {s:?}"))),
            },
            Some(Loose::Float(_)) => Err(D::Error::custom("expected a boolean, found a float")),
        }
    }

    pub fn nullable<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(d).map(Some)
    }

    pub fn nullable_number<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<f64>>, D::Error> {
        number(d).map(Some)
    }

    pub fn nullable_flag<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<bool>>, D::Error> {
        flag(d).map(Some)
    }
}
