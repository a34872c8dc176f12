//! Shared Tailwind class strings so pages stay visually consistent.

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";
pub const TEXT_MUTED: &str = "text-slate-400";

pub fn choice_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 text-left text-sm font-semibold text-sky-200"
    } else {
        "rounded-lg border border-slate-700 px-4 py-2 text-left text-sm text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    }
}

pub fn toggle_button(active: bool) -> &'static str {
    if active {
        "rounded-md bg-slate-100 px-3 py-1 text-sm font-medium text-sky-700 shadow-sm"
    } else {
        "rounded-md px-3 py-1 text-sm font-medium text-slate-400 transition hover:text-slate-100"
    }
}

pub fn btn_primary(enabled: bool) -> &'static str {
    if enabled {
        "w-full rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400"
    } else {
        "w-full cursor-not-allowed rounded-lg bg-slate-700 px-4 py-2 text-sm font-semibold text-slate-400"
    }
}
