use std::num::ParseIntError;
use lazy_static::lazy_static;
use scrollmark_config::{ Config, ConfigError, ConfigKeyInfo, ConfigValue };
use scrollmark_toolkit::console::Verbosity;
use crate::scroll::threshold::{ FireMode, ThresholdSet };
use crate::util::message::Message;

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum ScrollConfigKey {
    Thresholds,
    FireMode,
    ToastDuration,
    ToastElementId,
    ToastShowClass,
    ToastTemplate,
    TrackedSelector,
    EventName,
    Verbosity
}

#[derive(Clone)]
pub enum ScrollConfigValue {
    Integer(u32),
    String(String),
    StaticStr(&'static str)
}

lazy_static! {
    static ref CONFIG_CONFIG : Vec<ConfigKeyInfo<'static,ScrollConfigKey,ScrollConfigValue>> = {
        vec![
            ConfigKeyInfo { key: ScrollConfigKey::Thresholds, name: "thresholds", default: &ScrollConfigValue::StaticStr("25 50 100") },
            ConfigKeyInfo { key: ScrollConfigKey::FireMode, name: "fire-mode", default: &ScrollConfigValue::StaticStr("every-tick") },
            ConfigKeyInfo { key: ScrollConfigKey::ToastDuration, name: "toast.duration-ms", default: &ScrollConfigValue::Integer(1000) },
            ConfigKeyInfo { key: ScrollConfigKey::ToastElementId, name: "toast.element-id", default: &ScrollConfigValue::StaticStr("toast") },
            ConfigKeyInfo { key: ScrollConfigKey::ToastShowClass, name: "toast.show-class", default: &ScrollConfigValue::StaticStr("show") },
            ConfigKeyInfo { key: ScrollConfigKey::ToastTemplate, name: "toast.template", default: &ScrollConfigValue::StaticStr("You've scrolled to {percentage}% of the article") },
            ConfigKeyInfo { key: ScrollConfigKey::TrackedSelector, name: "tracked.selector", default: &ScrollConfigValue::StaticStr("article") },
            ConfigKeyInfo { key: ScrollConfigKey::EventName, name: "event.name", default: &ScrollConfigValue::StaticStr("customScrollEvent") },
            ConfigKeyInfo { key: ScrollConfigKey::Verbosity, name: "console.verbosity", default: &ScrollConfigValue::StaticStr("normal") },
        ]};
}

fn string_to_integer(value_str: &str) -> Result<u32,String> {
    value_str.trim().parse().map_err(|e: ParseIntError| e.to_string())
}

impl ScrollConfigValue {
    fn as_u32(&self) -> Result<u32,Message> {
        match self {
            ScrollConfigValue::Integer(x) => Ok(*x),
            _ => Err(Message::CodeInvariantFailed(format!("cannot get value as u32")))
        }
    }

    fn as_str(&self) -> Result<&str,Message> {
        match self {
            ScrollConfigValue::String(x) => Ok(x),
            ScrollConfigValue::StaticStr(x) => Ok(x),
            _ => Err(Message::CodeInvariantFailed(format!("cannot get value as str")))
        }
    }
}

impl ConfigValue for ScrollConfigValue {
    fn parse(&self, value_str: &str) -> Result<ScrollConfigValue,String> {
        Ok(match self {
            ScrollConfigValue::Integer(_) => ScrollConfigValue::Integer(string_to_integer(value_str)?),
            ScrollConfigValue::String(_) => ScrollConfigValue::String(value_str.to_string()),
            ScrollConfigValue::StaticStr(_) => ScrollConfigValue::String(value_str.to_string())
        })
    }
}

fn bad_value(key: &str, value: &str, expected: &str) -> Message {
    Message::BadConfig(ConfigError::BadConfigValue(key.to_string(),format!("'{}' is not {}",value,expected)))
}

fn parse_thresholds(value: &str) -> Result<ThresholdSet,Message> {
    ThresholdSet::parse(value).map_err(|e| {
        Message::BadConfig(ConfigError::BadConfigValue("thresholds".to_string(),e))
    })
}

fn parse_fire_mode(value: &str) -> Result<FireMode,Message> {
    FireMode::from_string(value).ok_or_else(|| bad_value("fire-mode",value,"every-tick or once"))
}

fn parse_verbosity(value: &str) -> Result<Verbosity,Message> {
    Verbosity::from_string(value).ok_or_else(|| bad_value("console.verbosity",value,"quiet, normal or noisy"))
}

pub struct ScrollMarkConfig(Config<'static,ScrollConfigKey,ScrollConfigValue>);

impl ScrollMarkConfig {
    pub fn new() -> ScrollMarkConfig {
        ScrollMarkConfig(Config::new(&CONFIG_CONFIG))
    }

    /* Structured values are checked before they are stored so that a typo fails at setup, not on the first
     * scroll, and leaves the previous value in place.
     */
    pub fn set(&mut self, key_str: &str, value: &str) -> Result<(),Message> {
        match key_str {
            "thresholds" => { parse_thresholds(value)?; },
            "fire-mode" => { parse_fire_mode(value)?; },
            "console.verbosity" => { parse_verbosity(value)?; },
            _ => {}
        }
        self.0.set(key_str,value)?;
        Ok(())
    }

    fn get(&self, key: &ScrollConfigKey) -> Result<&ScrollConfigValue,Message> { Ok(self.0.get(key)?) }

    pub fn get_u32(&self, key: &ScrollConfigKey) -> Result<u32,Message> { self.get(key)?.as_u32() }
    pub fn get_str(&self, key: &ScrollConfigKey) -> Result<&str,Message> { self.get(key)?.as_str() }

    pub fn thresholds(&self) -> Result<ThresholdSet,Message> {
        parse_thresholds(self.get_str(&ScrollConfigKey::Thresholds)?)
    }

    pub fn fire_mode(&self) -> Result<FireMode,Message> {
        parse_fire_mode(self.get_str(&ScrollConfigKey::FireMode)?)
    }

    pub fn verbosity(&self) -> Result<Verbosity,Message> {
        parse_verbosity(self.get_str(&ScrollConfigKey::Verbosity)?)
    }
}
