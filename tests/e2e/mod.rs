mod card;
mod commands;
mod intro;
mod themes;
