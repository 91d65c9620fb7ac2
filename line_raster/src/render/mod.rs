mod png_render;
mod term_render;
