use hashbrown::HashSet;
use crate::scroll::channel::NotificationChannel;

pub const THRESHOLD_CHANNEL : &str = "scroll-threshold";
pub const MAX_THRESHOLD : u32 = 1000;

#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub struct ThresholdCrossed(pub u32);

impl ThresholdCrossed {
    pub fn percentage(&self) -> u32 { self.0 }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum FireMode {
    EveryTick,
    OncePerThreshold
}

impl FireMode {
    pub fn from_string(value: &str) -> Option<FireMode> {
        match value {
            "every-tick" => Some(FireMode::EveryTick),
            "once" => Some(FireMode::OncePerThreshold),
            _ => None
        }
    }
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct ThresholdSet(Vec<u32>);

impl ThresholdSet {
    pub fn new(values: &[u32]) -> ThresholdSet {
        let mut values = values.to_vec();
        values.sort();
        values.dedup();
        ThresholdSet(values)
    }

    /* whitespace separated, eg "25 50 100" */
    pub fn parse(value: &str) -> Result<ThresholdSet,String> {
        let values = value.split_whitespace().map(|v| {
            let threshold = v.parse::<u32>().map_err(|e| format!("bad threshold '{}': {}",v,e))?;
            if threshold > MAX_THRESHOLD {
                return Err(format!("threshold {} is over {}",threshold,MAX_THRESHOLD));
            }
            Ok(threshold)
        }).collect::<Result<Vec<_>,_>>()?;
        Ok(ThresholdSet::new(&values))
    }

    pub fn values(&self) -> &[u32] { &self.0 }

    /* Floors, never rounds: 25.9 is 25. Non-finite and negative percentages cross nothing. */
    pub fn crossing(&self, percentage: f64) -> Option<ThresholdCrossed> {
        if !percentage.is_finite() { return None; }
        let floored = percentage.floor();
        if floored < 0. || floored > u32::MAX as f64 { return None; }
        let floored = floored as u32;
        if self.0.binary_search(&floored).is_ok() {
            Some(ThresholdCrossed(floored))
        } else {
            None
        }
    }
}

impl Default for ThresholdSet {
    fn default() -> ThresholdSet { ThresholdSet::new(&[25,50,100]) }
}

pub struct ThresholdTrigger {
    thresholds: ThresholdSet,
    mode: FireMode,
    fired: HashSet<u32>,
    channel: NotificationChannel<ThresholdCrossed>
}

impl ThresholdTrigger {
    pub fn new(thresholds: ThresholdSet, mode: FireMode, channel: &NotificationChannel<ThresholdCrossed>) -> ThresholdTrigger {
        ThresholdTrigger {
            thresholds,
            mode,
            fired: HashSet::new(),
            channel: channel.clone()
        }
    }

    pub fn trigger(&mut self, percentage: f64) -> Option<ThresholdCrossed> {
        let crossed = self.thresholds.crossing(percentage)?;
        if self.mode == FireMode::OncePerThreshold && !self.fired.insert(crossed.0) {
            return None;
        }
        self.channel.dispatch(crossed);
        Some(crossed)
    }

    /* forget what has fired so far; only matters in once mode */
    pub fn reset(&mut self) {
        self.fired.clear();
    }
}
