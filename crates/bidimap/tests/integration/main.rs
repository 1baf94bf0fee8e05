mod bidi_map;
