pub mod collections;
pub mod iterator;
pub mod statistics;
pub mod util;

pub use collections::{HashMap, MapOptions, MutableMap, ReadMap};
pub use iterator::{
    Concat, Enumerate, Filter, Instrumented, Iterator, Limit, LimitMode, Map, Skip, Step, concat,
    empty, enumerate, filter, from_fn, from_iter, instrument, limit, limit_with_mode, map, skip,
    step,
};
pub use statistics::{Statistics, StatisticsSnapshot};
pub use util::{Pair, Result, Status};
