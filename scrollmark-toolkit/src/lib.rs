pub mod js {
    pub mod dommanip;
    pub mod exception;
    pub mod timer;
}

pub mod plumbing {
    pub mod distributor;
    pub mod oneshot;
}

pub mod console;
pub mod refs;
