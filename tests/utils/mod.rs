mod get_filename;
