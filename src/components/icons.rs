//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuImage as FileImage, LuList as Menu, LuRotateCcw as Reset, LuSearch as Search,
        LuUpload as Upload, LuX as Close, LuZoomIn as ZoomIn,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsFolder2Open as FolderOpen,
        BsListUl as Menu, BsSearch as Search, BsUpload as Upload, BsXLg as Close,
        BsZoomIn as ZoomIn,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(SEARCH, Search);
themed_icon!(MENU, Menu);
themed_icon!(RESET, Reset);
themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
themed_icon!(ZOOM_IN, ZoomIn);
