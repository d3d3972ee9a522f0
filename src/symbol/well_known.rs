use tracing::debug;

use super::{JsSymbol, gate};
use crate::value::{CheapClone, JsValue};

/// The engine-defined symbols hooking customizable language behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSymbol {
    Iterator,
    Species,
    ToStringTag,
    HasInstance,
    IsConcatSpreadable,
    ToPrimitive,
    Match,
    Replace,
    Search,
    Split,
    Unscopables,
}

impl WellKnownSymbol {
    pub const ALL: [WellKnownSymbol; 11] = [
        WellKnownSymbol::Iterator,
        WellKnownSymbol::Species,
        WellKnownSymbol::ToStringTag,
        WellKnownSymbol::HasInstance,
        WellKnownSymbol::IsConcatSpreadable,
        WellKnownSymbol::ToPrimitive,
        WellKnownSymbol::Match,
        WellKnownSymbol::Replace,
        WellKnownSymbol::Search,
        WellKnownSymbol::Split,
        WellKnownSymbol::Unscopables,
    ];

    /// Property name on the `Symbol` constructor
    pub fn name(self) -> &'static str {
        match self {
            WellKnownSymbol::Iterator => "iterator",
            WellKnownSymbol::Species => "species",
            WellKnownSymbol::ToStringTag => "toStringTag",
            WellKnownSymbol::HasInstance => "hasInstance",
            WellKnownSymbol::IsConcatSpreadable => "isConcatSpreadable",
            WellKnownSymbol::ToPrimitive => "toPrimitive",
            WellKnownSymbol::Match => "match",
            WellKnownSymbol::Replace => "replace",
            WellKnownSymbol::Search => "search",
            WellKnownSymbol::Split => "split",
            WellKnownSymbol::Unscopables => "unscopables",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }
}

/// Well-known symbols of one realm, created once at realm setup
#[derive(Debug, Clone)]
pub struct WellKnownSymbols {
    pub iterator: JsSymbol,
    pub species: JsSymbol,
    pub to_string_tag: JsSymbol,
    pub has_instance: JsSymbol,
    pub is_concat_spreadable: JsSymbol,
    pub to_primitive: JsSymbol,
    pub match_symbol: JsSymbol,
    pub replace: JsSymbol,
    pub search: JsSymbol,
    pub split: JsSymbol,
    pub unscopables: JsSymbol,
}

impl WellKnownSymbols {
    /// Mint the table inside an internal construction scope.
    /// Each symbol's description is its bare name.
    pub(crate) fn create() -> Self {
        let internal = gate::enter_internal();
        let make = |which: WellKnownSymbol| {
            gate::construct_internal(&internal, Some(&JsValue::from(which.name())), None)
        };

        let table = Self {
            iterator: make(WellKnownSymbol::Iterator),
            species: make(WellKnownSymbol::Species),
            to_string_tag: make(WellKnownSymbol::ToStringTag),
            has_instance: make(WellKnownSymbol::HasInstance),
            is_concat_spreadable: make(WellKnownSymbol::IsConcatSpreadable),
            to_primitive: make(WellKnownSymbol::ToPrimitive),
            match_symbol: make(WellKnownSymbol::Match),
            replace: make(WellKnownSymbol::Replace),
            search: make(WellKnownSymbol::Search),
            split: make(WellKnownSymbol::Split),
            unscopables: make(WellKnownSymbol::Unscopables),
        };
        debug!(count = WellKnownSymbol::ALL.len(), "created well-known symbols");
        table
    }

    pub fn get(&self, which: WellKnownSymbol) -> &JsSymbol {
        match which {
            WellKnownSymbol::Iterator => &self.iterator,
            WellKnownSymbol::Species => &self.species,
            WellKnownSymbol::ToStringTag => &self.to_string_tag,
            WellKnownSymbol::HasInstance => &self.has_instance,
            WellKnownSymbol::IsConcatSpreadable => &self.is_concat_spreadable,
            WellKnownSymbol::ToPrimitive => &self.to_primitive,
            WellKnownSymbol::Match => &self.match_symbol,
            WellKnownSymbol::Replace => &self.replace,
            WellKnownSymbol::Search => &self.search,
            WellKnownSymbol::Split => &self.split,
            WellKnownSymbol::Unscopables => &self.unscopables,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WellKnownSymbol, JsSymbol)> + '_ {
        WellKnownSymbol::ALL
            .into_iter()
            .map(move |which| (which, self.get(which).cheap_clone()))
    }

    /// Which well-known symbol `sym` is, if any
    pub fn lookup(&self, sym: &JsSymbol) -> Option<WellKnownSymbol> {
        WellKnownSymbol::ALL
            .into_iter()
            .find(|which| self.get(*which) == sym)
    }
}
