use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{ self, Debug, Display };

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum ConfigError {
    UnknownConfigKey(String),
    UninitialisedKey(String),
    BadConfigValue(String,String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownConfigKey(k) => write!(f,"unknown config key '{}'",k),
            ConfigError::UninitialisedKey(k) => write!(f,"config key {} has no value",k),
            ConfigError::BadConfigValue(k,e) => write!(f,"bad value for config key '{}': {}",k,e)
        }
    }
}

impl std::error::Error for ConfigError {}

/* A value knows how to parse a string into another value of its own kind. The default for each key is used
 * as the template when parsing what the user supplies.
 */
pub trait ConfigValue : Sized {
    fn parse(&self, value_str: &str) -> Result<Self,String>;
}

pub struct ConfigKeyInfo<'a,K,V> {
    pub key: K,
    pub name: &'a str,
    pub default: &'a V
}

pub struct Config<'a,K,V> where K: PartialEq+Eq+Hash, V: ConfigValue + Clone {
    str_to_key: HashMap<String,K>,
    key_to_str: HashMap<K,String>,
    defaults: HashMap<K,&'a V>,
    values: HashMap<K,V>
}

impl<'a,K: Debug+Clone+PartialEq+Eq+Hash, V: ConfigValue+Clone> Config<'a,K,V> {
    pub fn new(info: &[ConfigKeyInfo<'a,K,V>]) -> Config<'a,K,V> {
        let mut str_to_key = HashMap::new();
        let mut key_to_str = HashMap::new();
        let mut defaults = HashMap::new();
        for info in info.iter() {
            str_to_key.insert(info.name.to_string(),info.key.clone());
            key_to_str.insert(info.key.clone(),info.name.to_string());
            defaults.insert(info.key.clone(),info.default);
        }
        Config {
            str_to_key,
            key_to_str,
            defaults,
            values: HashMap::new()
        }
    }

    pub fn set(&mut self, key_str: &str, value_str: &str) -> Result<(),ConfigError> {
        let key = self.str_to_key.get(key_str).ok_or_else(|| ConfigError::UnknownConfigKey(key_str.to_string()))?;
        let template = self.defaults.get(key).ok_or_else(|| ConfigError::UninitialisedKey(key_str.to_string()))?;
        let value = template.parse(value_str).map_err(|e| {
            ConfigError::BadConfigValue(key_str.to_string(),e)
        })?;
        self.values.insert(key.clone(),value);
        Ok(())
    }

    pub fn try_get(&self, key: &K) -> Option<&V> {
        if let Some(v) = self.values.get(key) { return Some(v); }
        if let Some(v) = self.defaults.get(key) { return Some(v); }
        None
    }

    pub fn get(&self, key: &K) -> Result<&V,ConfigError> {
        if let Some(v) = self.try_get(key) { return Ok(v); }
        Err(ConfigError::UninitialisedKey(format!("{:?}",key)))
    }

    pub fn name(&self, key: &K) -> Option<&str> {
        self.key_to_str.get(key).map(|x| x.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone,Debug,PartialEq,Eq,Hash)]
    enum TestKey { Count, Label, Missing }

    #[derive(Clone,Debug,PartialEq)]
    enum TestValue { Number(u32), Text(String) }

    impl ConfigValue for TestValue {
        fn parse(&self, value_str: &str) -> Result<TestValue,String> {
            Ok(match self {
                TestValue::Number(_) => TestValue::Number(value_str.parse().map_err(|e: std::num::ParseIntError| e.to_string())?),
                TestValue::Text(_) => TestValue::Text(value_str.to_string())
            })
        }
    }

    fn make_config<'a>(count: &'a TestValue, label: &'a TestValue) -> Config<'a,TestKey,TestValue> {
        Config::new(&[
            ConfigKeyInfo { key: TestKey::Count, name: "count", default: count },
            ConfigKeyInfo { key: TestKey::Label, name: "label", default: label },
        ])
    }

    #[test]
    fn test_defaults_and_overrides() {
        let count = TestValue::Number(3);
        let label = TestValue::Text("x".to_string());
        let mut config = make_config(&count,&label);
        assert_eq!(Ok(&TestValue::Number(3)),config.get(&TestKey::Count));
        config.set("count","12").expect("set");
        assert_eq!(Ok(&TestValue::Number(12)),config.get(&TestKey::Count));
        assert_eq!(Some("label"),config.name(&TestKey::Label));
        assert!(config.try_get(&TestKey::Missing).is_none());
        assert!(matches!(config.get(&TestKey::Missing),Err(ConfigError::UninitialisedKey(_))));
    }

    #[test]
    fn test_bad_keys_and_values() {
        let count = TestValue::Number(3);
        let label = TestValue::Text("x".to_string());
        let mut config = make_config(&count,&label);
        assert_eq!(Err(ConfigError::UnknownConfigKey("colour".to_string())),config.set("colour","red"));
        assert!(matches!(config.set("count","many"),Err(ConfigError::BadConfigValue(k,_)) if k == "count"));
        assert_eq!(Ok(&TestValue::Number(3)),config.get(&TestKey::Count));
    }
}
