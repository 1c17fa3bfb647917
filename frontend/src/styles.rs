pub const CONTAINER: &str = "min-h-screen bg-darkest text-white w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const TEXT_H1: &str = "font-display text-2xl md:text-3xl text-white";
pub const TEXT_BODY: &str = "font-body text-white/70";
pub const LINK: &str = "underline underline-offset-4";

// Metrics slider
pub const SLIDER_VIEWPORT: &str = "overflow-x-hidden w-[calc(100%+55px)] pl-[22px] -ml-[22px]";
pub const SLIDER_TRACK: &str = "flex overflow-x-auto snap-x snap-mandatory scroll-smooth no-scrollbar";
pub const SLIDER_CONTROLS: &str = "flex items-center justify-end gap-2 mt-2";
pub const SLIDER_BUTTON: &str = "w-8 h-8 rounded-full bg-card hover:brightness-125 flex items-center justify-center transition disabled:opacity-30 disabled:cursor-not-allowed";
pub const STAT_CARD: &str = "!flex flex-none snap-start";
pub const STAT_BODY: &str = "flex flex-col md:mb-auto";
pub const STAT_LABEL: &str = "font-title text-[.85rem] uppercase tracking-widest text-white/50";
pub const STAT_VALUE: &str = "font-title text-white text-[1rem]";
pub const STAT_DIVIDER: &str = "w-[2px] h-[60px] bg-card ml-10 mr-6";
pub const SKELETON: &str = "animate-pulse h-[16px] bg-card rounded-md col-span-2 w-[50px] mt-2";

// Tooltip
pub const TOOLTIP_ANCHOR: &str = "relative ml-1 outline-none rounded-md w-5 h-5 inline-flex items-center justify-center cursor-pointer";
pub const TOOLTIP_BUBBLE: &str = "absolute top-full left-1/2 -translate-x-1/2 mt-2 z-40 whitespace-nowrap px-3 py-2 bg-[#162036] rounded-sm font-base font-semibold text-sm text-white";

// Win panel
pub const WIN_CARD: &str = "w-full rounded-md bg-card py-6 md:py-4 px-4 mt-8 flex flex-col relative";
pub const WIN_ART: &str = "mr-2 w-[80px] h-[80px] md:h-[100px] md:w-[100px] flex items-center justify-center float";
pub const WIN_SHARE_BUTTON: &str = "group hover bg-[#162036] hover:brightness-125 w-[46px] h-[46px] rounded-full flex items-center justify-center hover:cursor-pointer absolute top-0 bottom-0 m-auto right-4 z-30 transition";

// Share modal
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-30 bg-darkest/90 overflow-y-auto transition-opacity ease-out duration-300";
pub const MODAL_CENTER: &str = "flex min-h-full items-center justify-center p-6 text-center";
pub const MODAL_PANEL: &str = "relative max-w-[400px] md:max-w-[500px] gradient-border text-white flex flex-col transform-gpu w-full rounded-lg bg-card bg-cover bg-center border-2 border-darkest outline outline-2 outline-offset-2 outline-[#162036] p-6 sm:p-8 md:p-12 transition-all";
pub const MODAL_CLOSE: &str = "p-2 absolute outline-none text-white top-4 right-4 hover:bg-white/[.05] cursor-pointer rounded-lg transition ease-out hover:-rotate-90";
pub const MODAL_TITLE: &str = "font-display text-white text-[1.4rem] md:text-2xl mb-6 w-full text-center";
pub const BUTTON_SHARE: &str = "m-auto mb-6 w-fit flex items-center justify-center outline-0 btn !opacity-100 bg-gradient-to-t from-darkRed to-red hover:from-darkRed hover:to-darkRed active:from-red active:to-darkRed";

// Shareable card
pub const SNAPSHOT_FRAME: &str = "rounded-md flex border-2 border-[#162036] overflow-hidden m-auto w-full sm:w-fit";
pub const SNAPSHOT_REGION: &str = "aspect-square max-w-[360px] md:max-w-[400px] sm:w-[360px] md:w-[400px] px-[15px] py-[15px] xs:py-[22px] select-none flex flex-col w-full bg-card";
pub const TICKET: &str = "bg-[#1D283F]/70 rounded-sm overflow-hidden w-full relative";
pub const TICKET_ROW: &str = "leading-5 xs:leading-6 text-left flex justify-between mb-2 xs:mb-3";
pub const TICKET_ROW_WON: &str = "leading-6 text-left flex justify-between items-end text-teal";
pub const TICKET_AMOUNT: &str = "flex font-display text-base xs:text-xl";
pub const TICKET_TEAR: &str = "h-[4px] w-full relative bg-card";
pub const TICKET_FOOTER: &str = "bg-[#242F47] p-4 w-full text-left leading-6 xs:leading-[1.6rem]";
pub const WINNER_BADGE: &str = "flex-none text-[.7rem] text-center font-title uppercase tracking-widest leading-6 bg-teal/10 px-3 rounded-md min-w-[80px]";
pub const BET_ID: &str = "text-[.7rem] text-white font-title uppercase tracking-widest leading-5 xs:leading-6 mt-auto";
